use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{PlanError, Result};
use crate::workflow::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_GENERATION_TIMEOUT, DEFAULT_PLAN_DAYS, DEFAULT_SEED,
    MAX_PLAN_DAYS,
};

/// Runtime settings for the wizard and its generator.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowConfig {
    /// Custom recipe catalogue; `None` uses the bundled one.
    pub recipes_path: Option<PathBuf>,
    pub plan_days: u32,
    pub seed: u64,
    /// `None` waits for the generator indefinitely.
    pub generation_timeout: Option<Duration>,
    pub cache_capacity: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            recipes_path: None,
            plan_days: DEFAULT_PLAN_DAYS,
            seed: DEFAULT_SEED,
            generation_timeout: Some(DEFAULT_GENERATION_TIMEOUT),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl WorkflowConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            recipes_path: cli.recipes.clone(),
            plan_days: cli.days,
            seed: cli.seed,
            generation_timeout: (cli.timeout_secs > 0)
                .then(|| Duration::from_secs(cli.timeout_secs)),
            cache_capacity: cli.cache_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PLAN_DAYS).contains(&self.plan_days) {
            return Err(PlanError::InvalidInput(format!(
                "days must be between 1 and {}",
                MAX_PLAN_DAYS
            )));
        }
        Ok(())
    }
}
