use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::workflow::constants::{
    DEFAULT_CALORIE_TARGET, DEFAULT_DIET_TYPE, DEFAULT_MEAL_COUNT,
};

/// One of the fixed meal slots a plan can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// All slots in canonical (serving) order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snacks" | "snack" => Ok(MealSlot::Snacks),
            _ => Err(PlanError::InvalidMealSlot(s.to_string())),
        }
    }
}

/// Which meal slots the user wants planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealPreferences {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub snacks: bool,
}

impl Default for MealPreferences {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: true,
            dinner: true,
            snacks: false,
        }
    }
}

impl MealPreferences {
    pub fn get(&self, slot: MealSlot) -> bool {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
        }
    }

    pub fn set(&mut self, slot: MealSlot, enabled: bool) {
        let flag = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        };
        *flag = enabled;
    }

    /// Flip a slot and return its new value.
    pub fn toggle(&mut self, slot: MealSlot) -> bool {
        let next = !self.get(slot);
        self.set(slot, next);
        next
    }

    /// Enabled slots in canonical order.
    pub fn enabled(&self) -> Vec<MealSlot> {
        MealSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot))
            .collect()
    }
}

/// Everything the wizard collects before generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current step number, 1..=4.
    pub step: u8,
    /// Empty means unset.
    pub selected_goal: String,
    pub diet_type: String,
    pub restrictions: BTreeSet<String>,
    pub meal_count: u8,
    pub calorie_target: u32,
    pub meal_preferences: MealPreferences,
    pub location: String,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: 1,
            selected_goal: String::new(),
            diet_type: DEFAULT_DIET_TYPE.to_string(),
            restrictions: BTreeSet::new(),
            meal_count: DEFAULT_MEAL_COUNT,
            calorie_target: DEFAULT_CALORIE_TARGET,
            meal_preferences: MealPreferences::default(),
            location: String::new(),
        }
    }
}

impl WizardState {
    pub fn has_goal(&self) -> bool {
        !self.selected_goal.trim().is_empty()
    }
}
