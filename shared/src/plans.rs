//! Plan content tables
//!
//! Meals, workouts and tips vary by BMI category; quotes are shared.
//! The builtin table is product copy and can be swapped out wholesale with
//! [`PlanCatalog::builder`].

use crate::errors::HealthError;
use crate::health_metrics::BmiCategory;
use std::collections::HashMap;

/// Content lists for a single BMI category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPlan {
    pub meals: Vec<String>,
    pub workouts: Vec<String>,
    pub tips: Vec<String>,
}

/// Catalog of plan content keyed by category
///
/// Every list in a catalog is non-empty; construction enforces it.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: HashMap<BmiCategory, CategoryPlan>,
    quotes: Vec<String>,
}

impl PlanCatalog {
    /// Start an empty catalog
    pub fn builder() -> PlanCatalogBuilder {
        PlanCatalogBuilder::default()
    }

    /// The content shipped with the planner
    pub fn builtin() -> Self {
        let mut builder = Self::builder().quotes(QUOTES);
        for category in BmiCategory::ALL {
            let (meals, workouts, tips) = builtin_plan(category);
            builder = builder.category(category, meals, workouts, tips);
        }
        Self {
            plans: builder.plans,
            quotes: builder.quotes,
        }
    }

    /// Plan for a category
    pub fn plan(&self, category: BmiCategory) -> &CategoryPlan {
        // Every category is present once built
        &self.plans[&category]
    }

    /// Motivational quotes
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for a custom [`PlanCatalog`]
#[derive(Debug, Default)]
pub struct PlanCatalogBuilder {
    plans: HashMap<BmiCategory, CategoryPlan>,
    quotes: Vec<String>,
}

impl PlanCatalogBuilder {
    /// Set the content for one category
    pub fn category<S: AsRef<str>>(
        mut self,
        category: BmiCategory,
        meals: &[S],
        workouts: &[S],
        tips: &[S],
    ) -> Self {
        self.plans.insert(
            category,
            CategoryPlan {
                meals: to_owned(meals),
                workouts: to_owned(workouts),
                tips: to_owned(tips),
            },
        );
        self
    }

    /// Set the shared quotes
    pub fn quotes<S: AsRef<str>>(mut self, quotes: &[S]) -> Self {
        self.quotes = to_owned(quotes);
        self
    }

    /// Validate and build the catalog
    pub fn build(self) -> Result<PlanCatalog, HealthError> {
        for category in BmiCategory::ALL {
            let Some(plan) = self.plans.get(&category) else {
                return Err(empty(category.label(), "plan"));
            };
            for (kind, list) in [
                ("meals", &plan.meals),
                ("workouts", &plan.workouts),
                ("tips", &plan.tips),
            ] {
                if list.is_empty() {
                    return Err(empty(category.label(), kind));
                }
            }
        }
        if self.quotes.is_empty() {
            return Err(empty("all categories", "quotes"));
        }

        Ok(PlanCatalog {
            plans: self.plans,
            quotes: self.quotes,
        })
    }
}

fn empty(category: &str, kind: &'static str) -> HealthError {
    HealthError::EmptyPlan {
        category: category.to_string(),
        kind,
    }
}

fn to_owned<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}

// ============================================================================
// Builtin content
// ============================================================================

type PlanRow = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

fn builtin_plan(category: BmiCategory) -> PlanRow {
    match category {
        BmiCategory::Underweight => (
            &[
                "Breakfast: Oatmeal with whole milk, banana and peanut butter",
                "Snack: Greek yogurt with granola and honey",
                "Lunch: Chicken and avocado wrap with a side of rice",
                "Snack: Trail mix with nuts and dried fruit",
                "Dinner: Salmon with sweet potatoes and olive oil roasted vegetables",
            ],
            &[
                "Full-body strength training, 3 sets of 8-10 reps, 3 days a week",
                "Compound lifts: squats, deadlifts and bench press",
                "Light cardio: 15-minute brisk walk on rest days",
                "Yoga or stretching for 20 minutes twice a week",
            ],
            &[
                "Eat five to six smaller meals throughout the day",
                "Add calorie-dense foods like nuts, seeds and healthy oils",
                "Prioritize protein at every meal to support muscle gain",
                "Track your weight weekly to monitor progress",
            ],
        ),
        BmiCategory::NormalWeight => (
            &[
                "Breakfast: Whole-grain toast with eggs and spinach",
                "Snack: Apple with a handful of almonds",
                "Lunch: Quinoa salad with chickpeas and mixed vegetables",
                "Snack: Hummus with carrot and cucumber sticks",
                "Dinner: Grilled chicken with brown rice and steamed broccoli",
            ],
            &[
                "Cardio: 30 minutes of jogging or cycling, 3 days a week",
                "Strength training: 2-3 full-body sessions a week",
                "Flexibility: 15 minutes of stretching after workouts",
                "Active recreation: hiking, swimming or team sports on weekends",
            ],
            &[
                "Maintain a balanced plate: half vegetables, a quarter protein, a quarter grains",
                "Stay hydrated with 2-3 liters of water a day",
                "Aim for 7-9 hours of sleep each night",
                "Keep portions consistent to maintain your weight",
            ],
        ),
        BmiCategory::Overweight => (
            &[
                "Breakfast: Vegetable omelette with a slice of whole-grain toast",
                "Snack: Low-fat Greek yogurt with berries",
                "Lunch: Grilled chicken salad with olive oil and lemon dressing",
                "Snack: Celery sticks with a tablespoon of peanut butter",
                "Dinner: Baked fish with roasted vegetables and a small portion of quinoa",
            ],
            &[
                "Brisk walking: 45 minutes, 5 days a week",
                "Low-impact cardio: cycling or swimming, 30 minutes, 3 days a week",
                "Bodyweight strength circuit: squats, lunges, push-ups, 2 days a week",
                "Daily stretching: 10 minutes in the morning",
            ],
            &[
                "Create a modest calorie deficit of about 500 kcal a day",
                "Replace sugary drinks with water or unsweetened tea",
                "Fill half your plate with non-starchy vegetables",
                "Take the stairs and add short walks after meals",
            ],
        ),
        BmiCategory::Obesity => (
            &[
                "Breakfast: Steel-cut oats with cinnamon and fresh berries",
                "Snack: Cottage cheese with cucumber slices",
                "Lunch: Lentil soup with a side salad",
                "Snack: A small pear with a few walnuts",
                "Dinner: Grilled turkey breast with steamed green vegetables",
            ],
            &[
                "Walking: start with 20 minutes a day and build up gradually",
                "Water aerobics or swimming: 30 minutes, 3 days a week",
                "Chair exercises and resistance bands: 2 days a week",
                "Gentle stretching or tai chi for mobility",
            ],
            &[
                "Consult a healthcare professional before starting a new program",
                "Focus on whole, minimally processed foods",
                "Set small, achievable goals and celebrate progress",
                "Keep a food journal to build awareness of eating habits",
            ],
        ),
    }
}

const QUOTES: &[&str] = &[
    "Take care of your body. It's the only place you have to live. - Jim Rohn",
    "The groundwork for all happiness is good health. - Leigh Hunt",
    "Health is not about the weight you lose, but about the life you gain.",
    "Small steps every day add up to big results.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = PlanCatalog::builtin();
        for category in BmiCategory::ALL {
            let plan = catalog.plan(category);
            assert!(!plan.meals.is_empty());
            assert!(!plan.workouts.is_empty());
            assert!(!plan.tips.is_empty());
        }
        assert!(!catalog.quotes().is_empty());
    }

    #[test]
    fn test_builder_accepts_complete_catalog() {
        let mut builder = PlanCatalog::builder().quotes(&["Keep going"]);
        for category in BmiCategory::ALL {
            builder = builder.category(category, &["Soup"], &["Walk"], &["Sleep"]);
        }
        let catalog = builder.build().unwrap();
        assert_eq!(catalog.plan(BmiCategory::Obesity).meals, vec!["Soup"]);
        assert_eq!(catalog.quotes(), ["Keep going".to_string()]);
    }

    #[test]
    fn test_builder_rejects_missing_category() {
        let err = PlanCatalog::builder()
            .quotes(&["Keep going"])
            .category(BmiCategory::Underweight, &["Soup"], &["Walk"], &["Sleep"])
            .build()
            .unwrap_err();
        assert!(matches!(err, HealthError::EmptyPlan { kind: "plan", .. }));
    }

    #[test]
    fn test_builder_rejects_empty_list() {
        let mut builder = PlanCatalog::builder().quotes(&["Keep going"]);
        for category in BmiCategory::ALL {
            builder = builder.category(category, &["Soup"], &["Walk"], &["Sleep"]);
        }
        let no_tips: &[&str] = &[];
        let err = builder
            .category(BmiCategory::Overweight, &["Soup"], &["Walk"], no_tips)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            HealthError::EmptyPlan {
                category: "Overweight".to_string(),
                kind: "tips"
            }
        );
    }

    #[test]
    fn test_builder_rejects_missing_quotes() {
        let mut builder = PlanCatalog::builder();
        for category in BmiCategory::ALL {
            builder = builder.category(category, &["Soup"], &["Walk"], &["Sleep"]);
        }
        let err = builder.build().unwrap_err();
        assert!(matches!(err, HealthError::EmptyPlan { kind: "quotes", .. }));
    }
}
