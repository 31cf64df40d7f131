mod plan;
mod recipe;
mod request;
mod wizard;

pub use plan::{Day, GenerationResult, Meal, Plan};
pub use recipe::Recipe;
pub use request::GenerationRequest;
pub use wizard::{MealPreferences, MealSlot, WizardState};
