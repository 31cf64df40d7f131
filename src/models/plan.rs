use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::MealSlot;

/// A single meal entry in a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,

    /// Display name of the dish.
    pub name: String,

    pub calories: f64,

    /// Macros in grams.
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Meal {
    pub fn new(
        slot: MealSlot,
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
    ) -> Self {
        Self {
            slot,
            name: name.into(),
            calories,
            protein,
            carbs,
            fats,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One day of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based display index.
    pub index: u32,
    pub meals: Vec<Meal>,
}

impl Day {
    pub fn new(index: u32, meals: Vec<Meal>) -> Self {
        Self { index, meals }
    }

    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

/// An ordered sequence of days.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plan {
    pub days: Vec<Day>,
}

impl Plan {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }

    /// Average calories per day, 0 for an empty plan.
    pub fn average_daily_calories(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        let total: f64 = self.days.iter().map(Day::total_calories).sum();
        total / self.days.len() as f64
    }

    /// Check that the plan is fit to show: at least one day, every day has
    /// a meal, and indices run 1..=n in order.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(PlanError::MalformedPlan("no days".to_string()));
        }

        for (position, day) in self.days.iter().enumerate() {
            let expected = position as u32 + 1;
            if day.index != expected {
                return Err(PlanError::MalformedPlan(format!(
                    "day index {} at position {}",
                    day.index, expected
                )));
            }
            if day.meals.is_empty() {
                return Err(PlanError::MalformedPlan(format!(
                    "day {} has no meals",
                    day.index
                )));
            }
        }

        Ok(())
    }
}

/// View-ready outcome of the generation step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResult {
    pub is_loading: bool,
    pub plan_generated: bool,
    /// Set when the fallback plan is on display.
    pub error: bool,
    pub generated_plan: Option<Plan>,
}

impl GenerationResult {
    pub fn used_fallback(&self) -> bool {
        self.error
    }

    /// Settle into the shown state with `plan`.
    pub(crate) fn show(&mut self, plan: Plan, error: bool) {
        self.generated_plan = Some(plan);
        self.error = error;
        self.plan_generated = true;
        self.is_loading = false;
    }
}
