use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{MealPreferences, WizardState};

/// Snapshot of the wizard handed to a plan generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub goal: String,
    pub diet_type: String,
    pub restrictions: BTreeSet<String>,
    pub calorie_target: u32,
    pub meal_count: u8,
    pub meal_preferences: MealPreferences,
    pub location: Option<String>,
}

impl From<&WizardState> for GenerationRequest {
    fn from(state: &WizardState) -> Self {
        let location = state.location.trim();
        Self {
            goal: state.selected_goal.trim().to_string(),
            diet_type: state.diet_type.clone(),
            restrictions: state.restrictions.clone(),
            calorie_target: state.calorie_target,
            meal_count: state.meal_count,
            meal_preferences: state.meal_preferences,
            location: (!location.is_empty()).then(|| location.to_string()),
        }
    }
}
