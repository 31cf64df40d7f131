use crate::models::{MealSlot, Plan, Recipe, WizardState};
use crate::workflow::options::{label_for, DIET_TYPES, GOALS, RESTRICTIONS};
use crate::workflow::{Notice, Notifier, Severity};

/// Prints workflow notices to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        display_notice(&notice);
    }
}

pub fn display_notice(notice: &Notice) {
    let marker = match notice.severity() {
        Severity::Info => "i",
        Severity::Success => "✓",
        Severity::Warning => "!",
    };
    println!("[{}] {}", marker, notice);
}

/// Display a plan day by day with per-day and overall totals.
pub fn display_plan(plan: &Plan, used_fallback: bool) {
    if plan.is_empty() {
        println!("No plan to display.");
        return;
    }

    println!();
    if used_fallback {
        println!("=== Starter Plan (personalised generation unavailable) ===");
    } else {
        println!("=== Your Nutrition Plan ===");
    }

    // Find max meal name length for alignment
    let max_name_len = plan
        .days
        .iter()
        .flat_map(|d| d.meals.iter())
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);

    for day in &plan.days {
        println!();
        println!("--- Day {} ---", day.index);

        for meal in &day.meals {
            println!(
                "  {:<10} {:<width$} - {:>4.0} cal | P {:>3.0}g C {:>3.0}g F {:>3.0}g",
                meal.slot.label(),
                meal.name,
                meal.calories,
                meal.protein,
                meal.carbs,
                meal.fats,
                width = max_name_len
            );
        }

        println!("  Total: {:.0} cal", day.total_calories());
    }

    println!();
    println!("--- Summary ---");
    println!("Days: {}", plan.len());
    println!("Meals: {}", plan.meal_count());
    println!("Average calories per day: {:.0}", plan.average_daily_calories());
    println!();
}

/// Display the selections collected so far.
pub fn display_selections(state: &WizardState) {
    let restrictions: Vec<&str> = state
        .restrictions
        .iter()
        .map(|r| label_for(RESTRICTIONS, r))
        .collect();
    let meals: Vec<&str> = state
        .meal_preferences
        .enabled()
        .into_iter()
        .map(MealSlot::label)
        .collect();

    println!();
    println!("Goal:          {}", label_for(GOALS, &state.selected_goal));
    println!("Diet:          {}", label_for(DIET_TYPES, &state.diet_type));
    println!(
        "Restrictions:  {}",
        if restrictions.is_empty() {
            "none".to_string()
        } else {
            restrictions.join(", ")
        }
    );
    println!("Calories:      {}", state.calorie_target);
    println!("Meals per day: {} ({})", state.meal_count, meals.join(", "));
    if !state.location.trim().is_empty() {
        println!("Location:      {}", state.location);
    }
    println!();
}

/// Display full recipe details.
pub fn display_recipes(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  {} - {} cal, P:{} C:{} F:{}",
            recipe.name, recipe.calories, recipe.protein, recipe.carbs, recipe.fats
        );
        if let Some(description) = &recipe.description {
            println!("      {}", description);
        }
        if !recipe.allergens.is_empty() {
            println!("      contains: {}", recipe.allergens.join(", "));
        }
    }

    println!();
}
