use crate::generator::constants::*;
use crate::models::{MealPreferences, MealSlot, Recipe};

/// Unnormalised calorie weight of a slot.
pub fn slot_weight(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_SHARE,
        MealSlot::Lunch => LUNCH_SHARE,
        MealSlot::Dinner => DINNER_SHARE,
        MealSlot::Snacks => SNACK_SHARE,
    }
}

/// Meals to plan for one day, in serving order.
///
/// Main slots appear once when enabled. Snacks fill whatever is left of
/// `meal_count` after the main slots, with at least one snack when the
/// slot is enabled.
pub fn daily_slots(prefs: &MealPreferences, meal_count: u8) -> Vec<MealSlot> {
    let mut slots: Vec<MealSlot> = prefs
        .enabled()
        .into_iter()
        .filter(|s| *s != MealSlot::Snacks)
        .collect();

    if prefs.snacks {
        let remaining = (meal_count as usize).saturating_sub(slots.len()).max(1);
        slots.extend(std::iter::repeat(MealSlot::Snacks).take(remaining));
    }

    slots
}

/// Calorie target for each planned meal, proportional to slot weights and
/// summing to `daily_target`.
pub fn calorie_shares(slots: &[MealSlot], daily_target: f64) -> Vec<f64> {
    let total: f64 = slots.iter().map(|s| slot_weight(*s)).sum();
    if total <= 0.0 {
        return vec![0.0; slots.len()];
    }
    slots
        .iter()
        .map(|s| daily_target * slot_weight(*s) / total)
        .collect()
}

/// Quadratic penalty on relative distance from the meal's calorie target.
/// Zero on target, negative elsewhere.
pub fn calorie_fit(calories: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let x = (calories - target) / target;
    -CALORIE_FIT_GAMMA * (x * x)
}

/// How well a recipe serves the user's goal. Unknown goals score zero.
pub fn goal_bias(goal: &str, recipe: &Recipe) -> f64 {
    let (protein, carbs, fats) = recipe.macro_split();

    match goal.trim().to_lowercase().as_str() {
        "weight-loss" => {
            LEAN_PROTEIN_GAMMA * recipe.protein_density() - LEAN_FAT_GAMMA * fats
        }
        "muscle-gain" => MUSCLE_PROTEIN_GAMMA * recipe.protein_density(),
        "maintenance" => {
            let (rp, rc, rf) = BALANCED_SPLIT;
            let distance = (protein - rp).abs() + (carbs - rc).abs() + (fats - rf).abs();
            BALANCE_GAMMA * (1.0 - distance)
        }
        "energy" => ENERGY_CARB_GAMMA * carbs,
        "heart-health" => {
            let sodium = if recipe.satisfies("low-sodium") {
                HEART_LOW_SODIUM_BONUS
            } else {
                0.0
            };
            sodium - HEART_FAT_GAMMA * fats
        }
        _ => 0.0,
    }
}

pub fn location_bias(recipe: &Recipe, location: Option<&str>) -> f64 {
    match location {
        Some(loc) if recipe.is_local_to(loc) => LOCAL_BONUS,
        _ => 0.0,
    }
}

pub fn repetition_penalty(times_used: u32) -> f64 {
    -REPETITION_PENALTY_GAMMA * times_used as f64
}
