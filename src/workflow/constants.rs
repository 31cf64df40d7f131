use std::time::Duration;

/// Diet type preselected on a fresh wizard.
pub const DEFAULT_DIET_TYPE: &str = "balanced";

/// Meals per day preselected on a fresh wizard.
pub const DEFAULT_MEAL_COUNT: u8 = 3;

/// Daily calorie target preselected on a fresh wizard.
pub const DEFAULT_CALORIE_TARGET: u32 = 2000;

/// Accepted daily calorie targets.
pub const MIN_CALORIE_TARGET: u32 = 1000;
pub const MAX_CALORIE_TARGET: u32 = 6000;

/// Accepted meals per day.
pub const MIN_MEAL_COUNT: u8 = 1;
pub const MAX_MEAL_COUNT: u8 = 8;

/// Number of days in a generated plan.
pub const DEFAULT_PLAN_DAYS: u32 = 7;
pub const MAX_PLAN_DAYS: u32 = 14;

/// Upper bound on a single generation call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Plans remembered by the generation cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Seed for the generator's tie-break jitter.
pub const DEFAULT_SEED: u64 = 42;

/// Wizard step bounds.
pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;
