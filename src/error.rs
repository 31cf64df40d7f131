use std::time::Duration;

use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid meal slot: {0}")]
    InvalidMealSlot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No eligible recipes for {0}")]
    NoEligibleRecipes(MealSlot),

    #[error("Malformed plan: {0}")]
    MalformedPlan(String),

    #[error("Plan generation timed out after {0:?}")]
    GenerationTimeout(Duration),

    #[error("Plan generation failed: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// A wizard transition refused by the controller.
///
/// Never propagated with `?`; the controller hands it back inside a
/// [`Transition`](crate::workflow::Transition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a goal before continuing")]
    MissingGoal,
    /// Steps are frozen while a plan is displayed; only a restart leaves it.
    #[error("Start over to change your selections")]
    PlanShown,
    #[error("A plan is already being generated")]
    GenerationInProgress,
}
