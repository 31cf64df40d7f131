use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::workflow::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CALORIE_TARGET, DEFAULT_DIET_TYPE, DEFAULT_MEAL_COUNT,
    DEFAULT_PLAN_DAYS, DEFAULT_SEED,
};

/// NutriPlan — a step-by-step nutrition plan wizard.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a recipe catalogue JSON file (defaults to the bundled one).
    #[arg(short, long, global = true)]
    pub recipes: Option<PathBuf>,

    /// Number of days to plan.
    #[arg(long, global = true, default_value_t = DEFAULT_PLAN_DAYS)]
    pub days: u32,

    /// Seed for tie-breaking between equally good recipes.
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Give up on generation after this many seconds (0 waits forever).
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Number of generated plans to remember (0 disables the cache).
    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_size: usize,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the wizard interactively.
    Plan,

    /// Generate a plan from flags without prompting.
    Generate(GenerateArgs),

    /// Print the bundled fallback plan.
    Fallback,

    /// Render a previously saved plan.
    Show {
        /// Plan JSON file written by `generate --output`.
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Goal id, e.g. weight-loss (close misspellings are accepted).
    #[arg(short, long)]
    pub goal: String,

    /// Diet type id.
    #[arg(short, long, default_value = DEFAULT_DIET_TYPE)]
    pub diet: String,

    /// Dietary restriction id; repeat for several.
    #[arg(long = "restriction")]
    pub restrictions: Vec<String>,

    /// Daily calorie target.
    #[arg(short, long, default_value_t = DEFAULT_CALORIE_TARGET)]
    pub calories: u32,

    /// Meals per day.
    #[arg(long, default_value_t = DEFAULT_MEAL_COUNT)]
    pub meal_count: u8,

    /// Meal slot to leave out; repeat for several.
    #[arg(long = "skip")]
    pub skip: Vec<String>,

    /// Include snacks.
    #[arg(long)]
    pub snacks: bool,

    /// Where you live, used to favour local dishes.
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Write the plan as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the plan as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
