use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use nutri_plan_rs::error::{PlanError, Result, ValidationError};
use nutri_plan_rs::generator::PlanGenerator;
use nutri_plan_rs::models::{Day, GenerationRequest, Meal, MealSlot, Plan};
use nutri_plan_rs::workflow::{
    fallback_plan, GenerationOutcome, NavigationTarget, Notice, PlanWorkflow, RecordingNotifier,
    Transition, WizardStep, WorkflowPhase,
};

#[derive(Clone)]
enum Script {
    Succeed(Plan),
    Fail,
    Sleep(Duration),
}

/// Generator that follows a fixed script and counts its calls.
#[derive(Clone)]
struct ScriptedGenerator {
    script: Script,
    calls: Arc<AtomicUsize>,
    last_request: Arc<std::sync::Mutex<Option<GenerationRequest>>>,
}

impl ScriptedGenerator {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(std::sync::Mutex::new(None)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Plan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.script {
            Script::Succeed(plan) => Ok(plan.clone()),
            Script::Fail => Err(PlanError::Generation("service unavailable".to_string())),
            Script::Sleep(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(sample_plan())
            }
        }
    }
}

fn sample_plan() -> Plan {
    Plan::new(vec![
        Day::new(
            1,
            vec![
                Meal::new(MealSlot::Breakfast, "Porridge", 450.0, 14.0, 70.0, 10.0),
                Meal::new(MealSlot::Dinner, "Stew", 750.0, 45.0, 60.0, 28.0),
            ],
        ),
        Day::new(
            2,
            vec![Meal::new(MealSlot::Lunch, "Salad", 600.0, 30.0, 40.0, 30.0)],
        ),
    ])
}

fn workflow(
    script: Script,
) -> (
    PlanWorkflow<ScriptedGenerator, RecordingNotifier>,
    ScriptedGenerator,
    RecordingNotifier,
) {
    let generator = ScriptedGenerator::new(script);
    let notifier = RecordingNotifier::new();
    let workflow = PlanWorkflow::new(generator.clone(), notifier.clone());
    (workflow, generator, notifier)
}

async fn advance_to_last_step(wf: &mut PlanWorkflow<ScriptedGenerator, RecordingNotifier>) {
    for _ in 0..3 {
        assert!(matches!(wf.advance().await, Transition::Moved(_)));
    }
    assert_eq!(wf.step(), WizardStep::Location);
}

#[tokio::test]
async fn test_advance_without_goal_is_blocked() {
    let (mut wf, generator, notifier) = workflow(Script::Succeed(sample_plan()));

    let transition = wf.advance().await;

    assert_eq!(transition, Transition::Blocked(ValidationError::MissingGoal));
    assert_eq!(wf.step(), WizardStep::Goal);
    assert_eq!(generator.calls(), 0);
    assert!(matches!(
        notifier.notices().as_slice(),
        [Notice::ValidationFailed(_)]
    ));
}

#[tokio::test]
async fn test_whitespace_goal_counts_as_missing() {
    let (mut wf, _, _) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("   ");
    assert!(matches!(wf.advance().await, Transition::Blocked(_)));
}

#[tokio::test]
async fn test_steps_advance_in_order() {
    let (mut wf, generator, _) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("muscle-gain");

    assert_eq!(wf.advance().await, Transition::Moved(WizardStep::Diet));
    assert_eq!(wf.advance().await, Transition::Moved(WizardStep::Meals));
    assert_eq!(wf.advance().await, Transition::Moved(WizardStep::Location));
    assert_eq!(wf.state().step, 4);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_advance_from_last_step_generates() {
    let (mut wf, generator, notifier) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("maintenance");
    advance_to_last_step(&mut wf).await;

    let transition = wf.advance().await;

    assert_eq!(transition, Transition::Generated(GenerationOutcome::Fresh));
    assert_eq!(generator.calls(), 1);
    assert_eq!(wf.state().step, 4, "step stays capped at 4");

    let result = wf.result();
    assert!(result.plan_generated);
    assert!(!result.is_loading);
    assert!(!result.error);
    assert_eq!(result.generated_plan, Some(sample_plan()));
    assert_eq!(wf.phase(), WorkflowPhase::Shown);
    assert_eq!(
        notifier.notices().last(),
        Some(&Notice::PlanGenerated { days: 2 })
    );
}

#[tokio::test]
async fn test_retreat_walks_back_and_exits_from_first_step() {
    let (mut wf, _, _) = workflow(Script::Fail);

    assert_eq!(
        wf.retreat(),
        Transition::Navigate(NavigationTarget::ExitWorkflow)
    );
    assert_eq!(wf.step(), WizardStep::Goal);

    wf.select_goal("energy");
    wf.advance().await;
    wf.advance().await;
    assert_eq!(wf.step(), WizardStep::Meals);

    assert_eq!(wf.retreat(), Transition::Moved(WizardStep::Diet));
    assert_eq!(wf.retreat(), Transition::Moved(WizardStep::Goal));
    assert_eq!(
        wf.retreat(),
        Transition::Navigate(NavigationTarget::ExitWorkflow)
    );
    assert_eq!(wf.state().selected_goal, "energy");
}

#[test]
fn test_toggle_restriction_is_symmetric() {
    let (mut wf, _, _) = workflow(Script::Fail);

    assert!(wf.toggle_restriction("gluten-free"));
    assert!(wf.toggle_restriction("nut-free"));
    assert!(wf.state().restrictions.contains("gluten-free"));

    assert!(!wf.toggle_restriction("gluten-free"));
    assert!(!wf.state().restrictions.contains("gluten-free"));
    assert_eq!(wf.state().restrictions.len(), 1);
}

#[test]
fn test_toggle_meal_preference_twice_restores() {
    let (mut wf, _, _) = workflow(Script::Fail);

    for slot in ["breakfast", "lunch", "dinner", "snacks"] {
        let before = wf.state().meal_preferences;
        wf.toggle_meal_preference(slot).unwrap();
        assert_ne!(wf.state().meal_preferences, before);
        wf.toggle_meal_preference(slot).unwrap();
        assert_eq!(wf.state().meal_preferences, before);
    }
}

#[test]
fn test_invalid_meal_slot_is_rejected_without_change() {
    let (mut wf, _, _) = workflow(Script::Fail);
    let before = wf.state().clone();

    let err = wf.toggle_meal_preference("brunch").unwrap_err();

    assert!(matches!(err, PlanError::InvalidMealSlot(ref s) if s == "brunch"));
    assert_eq!(wf.state(), &before);
}

#[test]
fn test_setters_validate_ranges() {
    let (mut wf, _, _) = workflow(Script::Fail);

    assert!(wf.set_calorie_target(500).is_err());
    assert!(wf.set_calorie_target(2400).is_ok());
    assert_eq!(wf.state().calorie_target, 2400);

    assert!(wf.set_meal_count(0).is_err());
    assert!(wf.set_meal_count(5).is_ok());

    assert!(wf.set_diet_type("  ").is_err());
    assert_eq!(wf.state().diet_type, "balanced");
}

#[tokio::test]
async fn test_generator_failure_shows_fallback() {
    let (mut wf, _, notifier) = workflow(Script::Fail);

    let outcome = wf.generate_plan().await;

    assert!(matches!(outcome, GenerationOutcome::Fallback { ref reason } if reason.contains("service unavailable")));
    let result = wf.result();
    assert!(result.error);
    assert!(result.plan_generated);
    assert!(!result.is_loading);
    assert_eq!(result.generated_plan, Some(fallback_plan()));
    assert!(matches!(
        notifier.notices().last(),
        Some(Notice::FallbackUsed { .. })
    ));
}

#[tokio::test]
async fn test_empty_plan_shows_fallback() {
    let (mut wf, _, _) = workflow(Script::Succeed(Plan::default()));

    let outcome = wf.generate_plan().await;

    assert!(matches!(outcome, GenerationOutcome::Fallback { .. }));
    assert!(wf.result().error);
    assert_eq!(wf.result().generated_plan, Some(fallback_plan()));
}

#[tokio::test]
async fn test_malformed_plan_shows_fallback() {
    let malformed = Plan::new(vec![Day::new(1, vec![])]);
    let (mut wf, _, _) = workflow(Script::Succeed(malformed));

    wf.generate_plan().await;

    assert!(wf.result().error);
    assert_eq!(wf.result().generated_plan, Some(fallback_plan()));
}

#[tokio::test]
async fn test_timeout_shows_fallback() {
    let (wf, _, _) = workflow(Script::Sleep(Duration::from_secs(5)));
    let mut wf = wf.with_timeout(Some(Duration::from_millis(20)));

    let outcome = wf.generate_plan().await;

    assert!(matches!(outcome, GenerationOutcome::Fallback { ref reason } if reason.contains("timed out")));
    assert!(wf.result().error);
    assert!(!wf.result().is_loading);
}

#[tokio::test]
async fn test_cancelled_generation_never_leaves_loading() {
    let (wf, _, _) = workflow(Script::Sleep(Duration::from_secs(5)));
    let mut wf = wf.with_timeout(None);

    let cancelled = tokio::time::timeout(Duration::from_millis(20), wf.generate_plan()).await;
    assert!(cancelled.is_err());

    let result = wf.result();
    assert!(!result.is_loading);
    assert!(result.plan_generated);
    assert!(result.error);
    assert_eq!(result.generated_plan, Some(fallback_plan()));
}

#[tokio::test]
async fn test_fallback_used_iff_error() {
    for script in [
        Script::Succeed(sample_plan()),
        Script::Fail,
        Script::Succeed(Plan::default()),
    ] {
        let (mut wf, _, _) = workflow(script);
        wf.generate_plan().await;

        let result = wf.result();
        let plan = result.generated_plan.as_ref().unwrap();
        assert!(result.plan_generated);
        assert_eq!(*plan == fallback_plan(), result.error);
    }
}

#[tokio::test]
async fn test_restart_keeps_selections() {
    let (mut wf, _, _) = workflow(Script::Fail);
    wf.select_goal("weight-loss");
    wf.set_diet_type("vegan").unwrap();
    wf.toggle_restriction("soy-free");
    wf.set_calorie_target(1800).unwrap();
    wf.toggle_meal_slot(MealSlot::Snacks);
    wf.set_location("Oslo");
    advance_to_last_step(&mut wf).await;
    wf.advance().await;

    let before = wf.state().clone();
    wf.restart();

    let after = wf.state();
    assert_eq!(after.step, 1);
    assert_eq!(after.selected_goal, before.selected_goal);
    assert_eq!(after.diet_type, before.diet_type);
    assert_eq!(after.restrictions, before.restrictions);
    assert_eq!(after.calorie_target, before.calorie_target);
    assert_eq!(after.meal_preferences, before.meal_preferences);
    assert_eq!(after.location, before.location);

    assert!(!wf.result().plan_generated);
    assert!(!wf.result().error);
    assert_eq!(wf.phase(), WorkflowPhase::Step(WizardStep::Goal));
}

#[tokio::test]
async fn test_retreat_while_plan_shown_changes_nothing() {
    let (mut wf, _, _) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("maintenance");
    advance_to_last_step(&mut wf).await;
    wf.advance().await;
    let before = wf.state().clone();

    assert_eq!(
        wf.retreat(),
        Transition::Blocked(ValidationError::PlanShown)
    );
    assert_eq!(wf.state(), &before);
    assert_eq!(wf.phase(), WorkflowPhase::Shown);
}

#[tokio::test]
async fn test_advance_while_plan_shown_does_not_regenerate() {
    let (mut wf, generator, _) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("maintenance");
    advance_to_last_step(&mut wf).await;
    wf.advance().await;
    assert_eq!(generator.calls(), 1);

    assert_eq!(
        wf.advance().await,
        Transition::Blocked(ValidationError::PlanShown)
    );
    assert_eq!(generator.calls(), 1);
    assert_eq!(wf.step(), WizardStep::Location);
    assert_eq!(wf.result().generated_plan, Some(sample_plan()));

    wf.restart();
    assert_eq!(wf.advance().await, Transition::Moved(WizardStep::Diet));
}

#[tokio::test]
async fn test_view_recipes_only_after_plan_shown() {
    let (mut wf, _, _) = workflow(Script::Succeed(sample_plan()));
    assert_eq!(wf.view_recipes(Some("stew")), None);

    wf.generate_plan().await;

    assert_eq!(
        wf.view_recipes(Some("stew")),
        Some(NavigationTarget::Recipes {
            query: Some("stew".to_string())
        })
    );
}

#[tokio::test]
async fn test_generator_receives_snapshot() {
    let (mut wf, generator, _) = workflow(Script::Succeed(sample_plan()));
    wf.select_goal("heart-health");
    wf.toggle_restriction("low-sodium");
    wf.set_location("Lisbon");

    wf.generate_plan().await;

    let request = generator.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.goal, "heart-health");
    assert!(request.restrictions.contains("low-sodium"));
    assert_eq!(request.location.as_deref(), Some("Lisbon"));
}

/// Goal "weight-loss", balanced diet, no restrictions, 2000 kcal,
/// breakfast/lunch/dinner without snacks, no location, and a rejecting
/// generator.
#[tokio::test]
async fn test_weight_loss_scenario_with_rejecting_generator() {
    let (mut wf, generator, _) = workflow(Script::Fail);

    wf.select_goal("weight-loss");
    wf.set_diet_type("balanced").unwrap();
    wf.set_calorie_target(2000).unwrap();
    wf.set_location("");
    let prefs = wf.state().meal_preferences;
    assert!(prefs.breakfast && prefs.lunch && prefs.dinner && !prefs.snacks);
    assert!(wf.state().restrictions.is_empty());

    advance_to_last_step(&mut wf).await;
    let transition = wf.advance().await;

    assert!(matches!(
        transition,
        Transition::Generated(GenerationOutcome::Fallback { .. })
    ));
    assert_eq!(generator.calls(), 1);
    let result = wf.result();
    assert!(result.error);
    assert!(result.plan_generated);
    assert_eq!(result.generated_plan, Some(fallback_plan()));
}
