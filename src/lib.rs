pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;
pub mod workflow;

pub use error::{PlanError, Result, ValidationError};
pub use models::{GenerationRequest, GenerationResult, Plan, WizardState};
pub use workflow::PlanWorkflow;
