use std::collections::BTreeSet;

use dialoguer::{Input, MultiSelect, Select};

use crate::error::{PlanError, Result};
use crate::models::{MealPreferences, MealSlot};
use crate::workflow::constants::{
    MAX_CALORIE_TARGET, MAX_MEAL_COUNT, MIN_CALORIE_TARGET, MIN_MEAL_COUNT,
};
use crate::workflow::{WizardOption, WizardStep, DIET_TYPES, GOALS, RESTRICTIONS};

/// What the user wants after finishing a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChoice {
    Next,
    Back,
}

/// What the user wants once a plan is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    ViewRecipes,
    StartOver,
    Save,
    Quit,
}

fn select_option(prompt: &str, options: &[WizardOption], current: &str) -> Result<&'static str> {
    let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
    let default = options.iter().position(|o| o.id == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection].id)
}

/// Prompt for the user's goal.
pub fn prompt_goal(current: &str) -> Result<&'static str> {
    select_option("What is your main goal?", GOALS, current)
}

/// Prompt for diet type.
pub fn prompt_diet(current: &str) -> Result<&'static str> {
    select_option("Which diet do you follow?", DIET_TYPES, current)
}

/// Prompt for dietary restrictions; returns the full chosen set.
pub fn prompt_restrictions(current: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    let labels: Vec<&str> = RESTRICTIONS.iter().map(|o| o.label).collect();
    let defaults: Vec<bool> = RESTRICTIONS
        .iter()
        .map(|o| current.contains(o.id))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Any dietary restrictions? (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen
        .into_iter()
        .map(|i| RESTRICTIONS[i].id.to_string())
        .collect())
}

/// Prompt for the daily calorie target.
pub fn prompt_calorie_target(current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Daily calorie target ({}-{})",
            MIN_CALORIE_TARGET, MAX_CALORIE_TARGET
        ))
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for meals per day.
pub fn prompt_meal_count(current: u8) -> Result<u8> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Meals per day ({}-{})",
            MIN_MEAL_COUNT, MAX_MEAL_COUNT
        ))
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for which meal slots to plan; returns the chosen slots.
pub fn prompt_meal_slots(current: &MealPreferences) -> Result<Vec<MealSlot>> {
    let labels: Vec<&str> = MealSlot::ALL.iter().map(|s| s.label()).collect();
    let defaults: Vec<bool> = MealSlot::ALL.iter().map(|s| current.get(*s)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Which meals should the plan cover?")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| MealSlot::ALL[i]).collect())
}

/// Prompt for the user's location (optional).
pub fn prompt_location(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Where are you based? (optional, press Enter to skip)")
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Ask whether to continue or go back after a step.
pub fn prompt_step_choice(step: WizardStep) -> Result<StepChoice> {
    let next = if step.next().is_some() {
        "Next"
    } else {
        "Generate my plan"
    };
    let back = if step.previous().is_some() {
        "Back"
    } else {
        "Exit"
    };

    let selection = Select::new()
        .with_prompt("Continue?")
        .items(&[next, back])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        StepChoice::Next
    } else {
        StepChoice::Back
    })
}

/// Ask what to do with a shown plan.
pub fn prompt_plan_action() -> Result<PlanAction> {
    let actions = [
        ("View recipes", PlanAction::ViewRecipes),
        ("Start over", PlanAction::StartOver),
        ("Save plan", PlanAction::Save),
        ("Quit", PlanAction::Quit),
    ];
    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].1)
}

/// Prompt for a file path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}
