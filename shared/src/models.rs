//! Domain models for the BMI Health Planner

use crate::health_metrics::BmiCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on first save
pub type EntryId = i64;

/// Outcome of a BMI computation with the generated plan
///
/// Immutable once built; read through the accessors. Serialized for
/// output only, so a category can never arrive detached from its BMI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResult {
    bmi: Decimal,
    category: BmiCategory,
    meals: Vec<String>,
    workouts: Vec<String>,
    tips: Vec<String>,
    quotes: Vec<String>,
}

impl HealthResult {
    pub fn new(
        bmi: Decimal,
        category: BmiCategory,
        meals: Vec<String>,
        workouts: Vec<String>,
        tips: Vec<String>,
        quotes: Vec<String>,
    ) -> Self {
        Self {
            bmi,
            category,
            meals,
            workouts,
            tips,
            quotes,
        }
    }

    pub fn bmi(&self) -> Decimal {
        self.bmi
    }

    pub fn category(&self) -> BmiCategory {
        self.category
    }

    pub fn meals(&self) -> &[String] {
        &self.meals
    }

    pub fn workouts(&self) -> &[String] {
        &self.workouts
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }
}

/// One persisted health snapshot
///
/// Plan lists are held as JSON text, exactly as they are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    /// Absent until the entry has been saved
    pub id: Option<EntryId>,
    pub email: String,
    pub weight_kg: Decimal,
    pub height_cm: Decimal,
    pub bmi: Decimal,
    pub bmi_category: BmiCategory,
    pub meal_plan_json: String,
    pub workout_plan_json: String,
    pub tips_json: String,
    pub quotes_json: String,
}

impl HealthEntry {
    /// Build an unsaved entry from a computed result
    ///
    /// BMI and category are copied as computed, never recalculated.
    pub fn from_result(
        email: impl Into<String>,
        weight_kg: Decimal,
        height_cm: Decimal,
        result: &HealthResult,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: None,
            email: email.into(),
            weight_kg,
            height_cm,
            bmi: result.bmi(),
            bmi_category: result.category(),
            meal_plan_json: serde_json::to_string(result.meals())?,
            workout_plan_json: serde_json::to_string(result.workouts())?,
            tips_json: serde_json::to_string(result.tips())?,
            quotes_json: serde_json::to_string(result.quotes())?,
        })
    }

    /// Decoded meal plan
    pub fn meal_plan(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.meal_plan_json)
    }

    /// Decoded workout plan
    pub fn workout_plan(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.workout_plan_json)
    }

    pub fn tips(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.tips_json)
    }

    pub fn quotes(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.quotes_json)
    }
}
