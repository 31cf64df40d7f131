use std::fmt;
use std::sync::{Arc, Mutex};

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// A transient, user-visible message raised by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A transition was refused; the message says what is missing.
    ValidationFailed(String),
    PlanGenerated { days: usize },
    /// Generation failed and the bundled plan is shown instead.
    FallbackUsed { reason: String },
    /// A generation was requested while another was still running.
    GenerationRejected,
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::ValidationFailed(_) => Severity::Warning,
            Notice::PlanGenerated { .. } => Severity::Success,
            Notice::FallbackUsed { .. } => Severity::Warning,
            Notice::GenerationRejected => Severity::Info,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ValidationFailed(message) => f.write_str(message),
            Notice::PlanGenerated { days } => {
                write!(f, "Your {}-day nutrition plan is ready", days)
            }
            Notice::FallbackUsed { .. } => f.write_str(
                "We couldn't generate a personalised plan, so here is a balanced starter plan",
            ),
            Notice::GenerationRejected => f.write_str("A plan is already being generated"),
        }
    }
}

/// Where the workflow asks its caller to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Leave the wizard entirely.
    ExitWorkflow,
    /// Open recipe search, optionally pre-filled.
    Recipes { query: Option<String> },
}

/// Receives notices from the workflow.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Collects notices so an embedding UI can drain them later.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every notice received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Remove and return every notice received so far.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
