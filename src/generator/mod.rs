//! Plan generation collaborators.
//!
//! The workflow only sees the [`PlanGenerator`] trait. The crate ships an
//! offline [`LocalPlanGenerator`] over a recipe catalogue and a
//! [`CachingGenerator`] decorator with an explicitly sized cache.

pub mod cache;
pub mod constants;
pub mod local;
pub mod scoring;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GenerationRequest, Plan};

pub use cache::{CachingGenerator, PlanCache};
pub use local::LocalPlanGenerator;

/// Produces a plan for a wizard snapshot.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Plan>;
}

