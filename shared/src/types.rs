//! Response shapes handed to callers

use crate::health_metrics::BmiCategory;
use crate::models::{EntryId, HealthEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored entry with its plan lists decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryResponse {
    pub id: Option<EntryId>,
    pub email: String,
    pub weight_kg: Decimal,
    pub height_cm: Decimal,
    pub bmi: Decimal,
    pub bmi_category: BmiCategory,
    pub meal_plan: Vec<String>,
    pub workout_plan: Vec<String>,
    pub tips: Vec<String>,
    pub quotes: Vec<String>,
}

impl TryFrom<&HealthEntry> for HealthEntryResponse {
    type Error = serde_json::Error;

    fn try_from(entry: &HealthEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id,
            email: entry.email.clone(),
            weight_kg: entry.weight_kg,
            height_cm: entry.height_cm,
            bmi: entry.bmi,
            bmi_category: entry.bmi_category,
            meal_plan: entry.meal_plan()?,
            workout_plan: entry.workout_plan()?,
            tips: entry.tips()?,
            quotes: entry.quotes()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthResult;

    #[test]
    fn test_response_uses_camel_case_keys() {
        let result = HealthResult::new(
            Decimal::new(2449, 2),
            BmiCategory::NormalWeight,
            vec!["Test meal".to_string()],
            vec!["Test workout".to_string()],
            vec!["Test tip".to_string()],
            vec!["Test quote".to_string()],
        );
        let mut entry =
            HealthEntry::from_result("find@example.com", Decimal::from(75), Decimal::from(175), &result)
                .unwrap();
        entry.id = Some(7);

        let response = HealthEntryResponse::try_from(&entry).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["bmiCategory"], "Normal weight");
        assert_eq!(json["mealPlan"][0], "Test meal");
        assert_eq!(json["workoutPlan"][0], "Test workout");
        assert!(json.get("weightKg").is_some());
    }
}
