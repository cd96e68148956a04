//! BMI computation and plan generation service
//!
//! Pure: no storage, no shared mutable state. Safe to call from any
//! number of tasks at once.

use bmi_planner_shared::{calculate_bmi, classify_bmi, HealthError, HealthResult, PlanCatalog};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Health service for BMI results and plans
#[derive(Debug, Clone, Default)]
pub struct HealthService {
    catalog: Arc<PlanCatalog>,
}

impl HealthService {
    /// Service over the builtin plan content
    pub fn new() -> Self {
        Self::default()
    }

    /// Service over a custom plan catalog
    pub fn with_catalog(catalog: PlanCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Compute BMI, its category and the plan for that category
    ///
    /// Height is in centimeters. Non-positive weight or height is rejected.
    pub fn generate(&self, weight_kg: Decimal, height_cm: Decimal) -> Result<HealthResult, HealthError> {
        let bmi = calculate_bmi(weight_kg, height_cm)?;
        let category = classify_bmi(bmi);
        let plan = self.catalog.plan(category);

        debug!(%weight_kg, %height_cm, %bmi, %category, "Generated health result");

        Ok(HealthResult::new(
            bmi,
            category,
            plan.meals.clone(),
            plan.workouts.clone(),
            plan.tips.clone(),
            self.catalog.quotes().to_vec(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_planner_shared::BmiCategory;
    use proptest::prelude::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_bmi_calculation() {
        let result = HealthService::new().generate(dec("70"), dec("170")).unwrap();

        // BMI should be approximately 24.22 for 70kg, 170cm
        assert!(result.bmi() > dec("24.0"));
        assert!(result.bmi() < dec("25.0"));
        assert_eq!(result.bmi(), dec("24.22"));
    }

    #[rstest]
    #[case("45", "170", BmiCategory::Underweight)]
    #[case("70", "170", BmiCategory::NormalWeight)]
    #[case("85", "170", BmiCategory::Overweight)]
    #[case("100", "170", BmiCategory::Obesity)]
    fn test_bmi_category_classification(
        #[case] weight: &str,
        #[case] height: &str,
        #[case] expected: BmiCategory,
    ) {
        let result = HealthService::new().generate(dec(weight), dec(height)).unwrap();
        assert_eq!(result.category(), expected);
    }

    #[test]
    fn test_category_labels_match_product_copy() {
        let service = HealthService::new();
        let labels: Vec<&str> = ["45", "70", "85", "100"]
            .iter()
            .map(|w| service.generate(dec(w), dec("170")).unwrap().category().label())
            .collect();
        assert_eq!(labels, ["Underweight", "Normal weight", "Overweight", "Obesity"]);
    }

    #[test]
    fn test_plan_generation() {
        let result = HealthService::new().generate(dec("70"), dec("170")).unwrap();

        assert!(!result.meals().is_empty());
        assert!(!result.workouts().is_empty());
        assert!(!result.tips().is_empty());
        assert!(!result.quotes().is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let service = HealthService::new();
        let first = service.generate(dec("82.5"), dec("181")).unwrap();
        let second = service.generate(dec("82.5"), dec("181")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_height_is_invalid_input() {
        let err = HealthService::new().generate(dec("70"), dec("0")).unwrap_err();
        assert!(matches!(err, HealthError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_weight_is_invalid_input() {
        let err = HealthService::new().generate(dec("-70"), dec("170")).unwrap_err();
        assert!(matches!(err, HealthError::InvalidInput(_)));
    }

    #[test]
    fn test_custom_catalog_is_used() {
        let mut builder = PlanCatalog::builder().quotes(&["One day at a time"]);
        for category in BmiCategory::ALL {
            builder = builder.category(category, &[category.label()], &["Walk"], &["Sleep"]);
        }
        let service = HealthService::with_catalog(builder.build().unwrap());

        let result = service.generate(dec("100"), dec("170")).unwrap();

        assert_eq!(result.meals(), ["Obesity".to_string()]);
        assert_eq!(result.quotes(), ["One day at a time".to_string()]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Every valid input yields four non-empty lists
        #[test]
        fn prop_plans_never_empty(weight in 1i64..40_000, height in 50i64..25_000) {
            let result = HealthService::new()
                .generate(Decimal::new(weight, 1), Decimal::new(height, 1))
                .unwrap();
            prop_assert!(!result.meals().is_empty());
            prop_assert!(!result.workouts().is_empty());
            prop_assert!(!result.tips().is_empty());
            prop_assert!(!result.quotes().is_empty());
        }

        /// Property: Category always agrees with the returned BMI
        #[test]
        fn prop_category_consistent_with_bmi(weight in 300i64..2_000, height in 1_400i64..2_100) {
            let result = HealthService::new()
                .generate(Decimal::new(weight, 1), Decimal::new(height, 1))
                .unwrap();
            prop_assert_eq!(result.category(), classify_bmi(result.bmi()));
        }
    }
}
