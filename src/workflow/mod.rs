pub mod constants;
pub mod controller;
pub mod fallback;
pub mod notify;
pub mod options;
pub mod step;

pub use controller::{GenerationOutcome, PlanWorkflow, Transition, WorkflowPhase};
pub use fallback::{fallback_plan, is_fallback};
pub use notify::{NavigationTarget, Notice, Notifier, RecordingNotifier, Severity};
pub use options::{WizardOption, DIET_TYPES, GOALS, RESTRICTIONS};
pub use step::WizardStep;
