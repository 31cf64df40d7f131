pub mod export;
pub mod prompts;
pub mod render;
pub mod resolve;

pub use export::{export_plan_csv, write_plan_csv};
pub use prompts::{
    prompt_calorie_target, prompt_diet, prompt_goal, prompt_location, prompt_meal_count,
    prompt_meal_slots, prompt_path, prompt_plan_action, prompt_restrictions, prompt_step_choice,
    PlanAction, StepChoice,
};
pub use render::{display_notice, display_plan, display_recipes, display_selections, ConsoleNotifier};
pub use resolve::resolve_option;
