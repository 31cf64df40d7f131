use std::fmt;

use crate::workflow::constants::{FIRST_STEP, LAST_STEP};

/// The four data-collection steps of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Goal,
    Diet,
    Meals,
    Location,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Goal => 1,
            WizardStep::Diet => 2,
            WizardStep::Meals => 3,
            WizardStep::Location => 4,
        }
    }

    /// Map a step number back to a step; numbers outside 1..=4 clamp.
    pub fn from_number(n: u8) -> Self {
        match n.clamp(FIRST_STEP, LAST_STEP) {
            1 => WizardStep::Goal,
            2 => WizardStep::Diet,
            3 => WizardStep::Meals,
            _ => WizardStep::Location,
        }
    }

    /// Following step, `None` on the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Goal => Some(WizardStep::Diet),
            WizardStep::Diet => Some(WizardStep::Meals),
            WizardStep::Meals => Some(WizardStep::Location),
            WizardStep::Location => None,
        }
    }

    /// Preceding step, `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Goal => None,
            WizardStep::Diet => Some(WizardStep::Goal),
            WizardStep::Meals => Some(WizardStep::Diet),
            WizardStep::Location => Some(WizardStep::Meals),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Goal => "What is your goal?",
            WizardStep::Diet => "Diet type and restrictions",
            WizardStep::Meals => "Meals and calories",
            WizardStep::Location => "Where are you based?",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/{}: {}", self.number(), LAST_STEP, self.title())
    }
}
