//! Plan generation workflow controller.
//!
//! Owns the wizard state and the generation result, exposes the step
//! transitions, and turns every generation failure into the bundled
//! fallback plan so the user always ends up looking at something.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{PlanError, Result, ValidationError};
use crate::generator::PlanGenerator;
use crate::models::{GenerationRequest, GenerationResult, MealSlot, Plan, WizardState};
use crate::workflow::constants::{
    DEFAULT_GENERATION_TIMEOUT, FIRST_STEP, LAST_STEP, MAX_CALORIE_TARGET, MAX_MEAL_COUNT,
    MIN_CALORIE_TARGET, MIN_MEAL_COUNT,
};
use crate::workflow::fallback::fallback_plan;
use crate::workflow::notify::{NavigationTarget, Notice, Notifier};
use crate::workflow::step::WizardStep;

/// Where the workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    Step(WizardStep),
    Generating,
    Shown,
}

/// How a call to [`PlanWorkflow::generate_plan`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The generator's plan is shown.
    Fresh,
    /// The bundled plan is shown; `reason` describes the failure.
    Fallback { reason: String },
    /// Another generation was in flight; nothing changed.
    Rejected,
}

/// Result of `advance` / `retreat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(WizardStep),
    Blocked(ValidationError),
    Generated(GenerationOutcome),
    Navigate(NavigationTarget),
}

/// Marks a generation as in flight for as long as it lives.
///
/// Settling consumes the guard. A guard dropped unsettled (the generation
/// future was cancelled) falls back so `is_loading` never sticks.
struct InFlight<'a> {
    result: &'a mut GenerationResult,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(result: &'a mut GenerationResult) -> Self {
        result.is_loading = true;
        result.error = false;
        Self {
            result,
            settled: false,
        }
    }

    fn succeed(mut self, plan: Plan) {
        self.result.show(plan, false);
        self.settled = true;
    }

    fn fall_back(mut self) {
        self.result.show(fallback_plan(), true);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("plan generation abandoned before completion, showing fallback plan");
            self.result.show(fallback_plan(), true);
        }
    }
}

/// The multi-step nutrition plan wizard.
pub struct PlanWorkflow<G, N> {
    state: WizardState,
    result: GenerationResult,
    generator: G,
    notifier: N,
    timeout: Option<Duration>,
}

impl<G, N> PlanWorkflow<G, N>
where
    G: PlanGenerator,
    N: Notifier,
{
    /// Start a fresh wizard at step 1.
    pub fn new(generator: G, notifier: N) -> Self {
        Self::with_state(WizardState::default(), generator, notifier)
    }

    /// Start from previously collected selections. The step is clamped
    /// into 1..=4.
    pub fn with_state(mut state: WizardState, generator: G, notifier: N) -> Self {
        state.step = state.step.clamp(FIRST_STEP, LAST_STEP);
        Self {
            state,
            result: GenerationResult::default(),
            generator,
            notifier,
            timeout: Some(DEFAULT_GENERATION_TIMEOUT),
        }
    }

    /// Bound each generation call; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_number(self.state.step)
    }

    pub fn phase(&self) -> WorkflowPhase {
        if self.result.is_loading {
            WorkflowPhase::Generating
        } else if self.result.plan_generated {
            WorkflowPhase::Shown
        } else {
            WorkflowPhase::Step(self.step())
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn select_goal(&mut self, goal: impl Into<String>) {
        self.state.selected_goal = goal.into();
        debug!(goal = %self.state.selected_goal, "goal selected");
    }

    pub fn set_diet_type(&mut self, diet: impl Into<String>) -> Result<()> {
        let diet = diet.into();
        if diet.trim().is_empty() {
            return Err(PlanError::InvalidInput(
                "diet type must not be empty".to_string(),
            ));
        }
        self.state.diet_type = diet;
        Ok(())
    }

    /// Add `id` to the restrictions if absent, remove it if present.
    /// Returns whether it is now present.
    pub fn toggle_restriction(&mut self, id: &str) -> bool {
        let present = if self.state.restrictions.remove(id) {
            false
        } else {
            self.state.restrictions.insert(id.to_string());
            true
        };
        debug!(restriction = id, present, "restriction toggled");
        present
    }

    /// Flip a meal slot by name. Unknown names are rejected and leave the
    /// state untouched.
    pub fn toggle_meal_preference(&mut self, slot: &str) -> Result<bool> {
        let slot: MealSlot = slot.parse()?;
        Ok(self.toggle_meal_slot(slot))
    }

    pub fn toggle_meal_slot(&mut self, slot: MealSlot) -> bool {
        let enabled = self.state.meal_preferences.toggle(slot);
        debug!(%slot, enabled, "meal preference toggled");
        enabled
    }

    pub fn set_calorie_target(&mut self, calories: u32) -> Result<()> {
        if !(MIN_CALORIE_TARGET..=MAX_CALORIE_TARGET).contains(&calories) {
            return Err(PlanError::InvalidInput(format!(
                "calorie target must be between {} and {}",
                MIN_CALORIE_TARGET, MAX_CALORIE_TARGET
            )));
        }
        self.state.calorie_target = calories;
        Ok(())
    }

    pub fn set_meal_count(&mut self, count: u8) -> Result<()> {
        if !(MIN_MEAL_COUNT..=MAX_MEAL_COUNT).contains(&count) {
            return Err(PlanError::InvalidInput(format!(
                "meal count must be between {} and {}",
                MIN_MEAL_COUNT, MAX_MEAL_COUNT
            )));
        }
        self.state.meal_count = count;
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.state.location = location.into();
    }

    /// Steps only move while the wizard itself is on screen.
    fn steps_frozen(&self) -> Option<ValidationError> {
        match self.phase() {
            WorkflowPhase::Step(_) => None,
            WorkflowPhase::Generating => Some(ValidationError::GenerationInProgress),
            WorkflowPhase::Shown => Some(ValidationError::PlanShown),
        }
    }

    /// Move forward one step, or generate the plan from the last step.
    pub async fn advance(&mut self) -> Transition {
        if let Some(error) = self.steps_frozen() {
            debug!(%error, "advance ignored outside the wizard steps");
            return Transition::Blocked(error);
        }

        let step = self.step();

        if step == WizardStep::Goal && !self.state.has_goal() {
            let error = ValidationError::MissingGoal;
            debug!("advance blocked: no goal selected");
            self.notifier
                .notify(Notice::ValidationFailed(error.to_string()));
            return Transition::Blocked(error);
        }

        match step.next() {
            Some(next) => {
                self.state.step = next.number();
                debug!(from = step.number(), to = next.number(), "wizard advanced");
                Transition::Moved(next)
            }
            None => Transition::Generated(self.generate_plan().await),
        }
    }

    /// Move back one step. From the first step, asks the caller to leave
    /// the wizard without touching any state. Refused while a plan is
    /// generating or displayed.
    pub fn retreat(&mut self) -> Transition {
        if let Some(error) = self.steps_frozen() {
            debug!(%error, "retreat ignored outside the wizard steps");
            return Transition::Blocked(error);
        }

        let step = self.step();
        match step.previous() {
            Some(previous) => {
                self.state.step = previous.number();
                debug!(from = step.number(), to = previous.number(), "wizard retreated");
                Transition::Moved(previous)
            }
            None => {
                debug!("retreat from first step, exiting workflow");
                Transition::Navigate(NavigationTarget::ExitWorkflow)
            }
        }
    }

    /// Generate a plan from the current selections.
    ///
    /// Always ends with a plan on display: the generator's when it returns a
    /// well-formed one, otherwise the bundled fallback with `error` set.
    pub async fn generate_plan(&mut self) -> GenerationOutcome {
        if self.result.is_loading {
            debug!("generation already in flight, rejecting");
            self.notifier.notify(Notice::GenerationRejected);
            return GenerationOutcome::Rejected;
        }

        let request = GenerationRequest::from(&self.state);
        info!(
            goal = %request.goal,
            diet = %request.diet_type,
            calories = request.calorie_target,
            "generating plan"
        );

        let in_flight = InFlight::begin(&mut self.result);

        let attempt = match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.generator.generate(&request)).await {
                    Ok(attempt) => attempt,
                    Err(_) => Err(PlanError::GenerationTimeout(limit)),
                }
            }
            None => self.generator.generate(&request).await,
        };

        match attempt.and_then(|plan| plan.validate().map(|_| plan)) {
            Ok(plan) => {
                let days = plan.len();
                in_flight.succeed(plan);
                info!(days, "plan generated");
                self.notifier.notify(Notice::PlanGenerated { days });
                GenerationOutcome::Fresh
            }
            Err(e) => {
                in_flight.fall_back();
                let reason = e.to_string();
                warn!(error = %reason, "plan generation failed, using fallback plan");
                self.notifier.notify(Notice::FallbackUsed {
                    reason: reason.clone(),
                });
                GenerationOutcome::Fallback { reason }
            }
        }
    }

    /// Go back to step 1 keeping every selection.
    pub fn restart(&mut self) {
        self.result.plan_generated = false;
        self.result.error = false;
        self.state.step = FIRST_STEP;
        debug!("workflow restarted");
    }

    /// Ask the caller to open recipe search. Only available once a plan is
    /// shown.
    pub fn view_recipes(&self, query: Option<&str>) -> Option<NavigationTarget> {
        (self.phase() == WorkflowPhase::Shown).then(|| NavigationTarget::Recipes {
            query: query.map(str::to_string),
        })
    }
}
