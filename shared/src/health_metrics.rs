//! Health metrics calculations module
//!
//! Provides the BMI formula and the WHO-style category bands.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Exact Arithmetic**: `Decimal` throughout, never binary floating point
//! 3. **Type Safety**: Categories are an enum, labels are derived from it

use crate::errors::HealthError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places BMI values are kept to
pub const BMI_SCALE: u32 = 2;

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    /// All categories, lowest band first
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obesity,
    ];

    /// Label stored alongside an entry
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Get the BMI range for this category as `[lower, upper)`
    ///
    /// `None` means the band is unbounded on that side.
    pub fn range(&self) -> (Option<Decimal>, Option<Decimal>) {
        match self {
            BmiCategory::Underweight => (None, Some(underweight_upper())),
            BmiCategory::NormalWeight => (Some(underweight_upper()), Some(normal_upper())),
            BmiCategory::Overweight => (Some(normal_upper()), Some(overweight_upper())),
            BmiCategory::Obesity => (Some(overweight_upper()), None),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BmiCategory {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BmiCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| HealthError::InvalidInput(format!("unknown BMI category '{}'", s)))
    }
}

fn underweight_upper() -> Decimal {
    Decimal::new(185, 1)
}

fn normal_upper() -> Decimal {
    Decimal::new(25, 0)
}

fn overweight_upper() -> Decimal {
    Decimal::new(30, 0)
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded half away from zero to
/// [`BMI_SCALE`] places. Both inputs must be strictly positive.
pub fn calculate_bmi(weight_kg: Decimal, height_cm: Decimal) -> Result<Decimal, HealthError> {
    if weight_kg <= Decimal::ZERO {
        return Err(HealthError::InvalidInput(format!(
            "weight must be positive, got {} kg",
            weight_kg
        )));
    }
    if height_cm <= Decimal::ZERO {
        return Err(HealthError::InvalidInput(format!(
            "height must be positive, got {} cm",
            height_cm
        )));
    }

    let height_m = height_cm / Decimal::ONE_HUNDRED;
    let bmi = height_m
        .checked_mul(height_m)
        .and_then(|height_m_sq| weight_kg.checked_div(height_m_sq))
        .ok_or_else(|| {
            HealthError::InvalidInput(format!(
                "BMI out of range for {} kg at {} cm",
                weight_kg, height_cm
            ))
        })?;

    Ok(bmi.round_dp_with_strategy(BMI_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

/// Classify BMI into category
pub fn classify_bmi(bmi: Decimal) -> BmiCategory {
    if bmi < underweight_upper() {
        BmiCategory::Underweight
    } else if bmi < normal_upper() {
        BmiCategory::NormalWeight
    } else if bmi < overweight_upper() {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}
