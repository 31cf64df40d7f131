use std::collections::BTreeSet;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};

use nutri_plan_rs::cli::{Cli, Command, GenerateArgs};
use nutri_plan_rs::config::WorkflowConfig;
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::generator::{CachingGenerator, LocalPlanGenerator, PlanGenerator};
use nutri_plan_rs::interface::{
    display_plan, display_recipes, display_selections, export_plan_csv, prompt_calorie_target,
    prompt_diet, prompt_goal, prompt_location, prompt_meal_count, prompt_meal_slots, prompt_path,
    prompt_plan_action, prompt_restrictions, prompt_step_choice, resolve_option, ConsoleNotifier,
    PlanAction, StepChoice,
};
use nutri_plan_rs::logging::init_tracing;
use nutri_plan_rs::models::{MealSlot, Plan};
use nutri_plan_rs::state::{bundled_recipes, load_plan, load_recipes, save_plan, RecipeCatalog};
use nutri_plan_rs::workflow::{
    fallback_plan, is_fallback, GenerationOutcome, NavigationTarget, Notifier, PlanWorkflow,
    Transition, WizardStep, WorkflowPhase, DIET_TYPES, GOALS, RESTRICTIONS,
};

type Workflow = PlanWorkflow<CachingGenerator<LocalPlanGenerator>, ConsoleNotifier>;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = WorkflowConfig::from_cli(&cli)?;
    debug!(?config, "configuration resolved");

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&config).await,
        Command::Generate(args) => cmd_generate(&config, &args).await,
        Command::Fallback => cmd_fallback(),
        Command::Show { input } => cmd_show(&input),
    }
}

/// Load the recipe catalogue and wrap the local generator in its cache.
fn build_workflow(config: &WorkflowConfig) -> Result<Workflow> {
    let recipes = match &config.recipes_path {
        Some(path) => load_recipes(path)?,
        None => bundled_recipes()?,
    };
    let catalog = RecipeCatalog::new(recipes);
    info!(recipes = catalog.len(), "recipe catalogue loaded");

    let generator = LocalPlanGenerator::new(catalog)
        .with_days(config.plan_days)
        .with_seed(config.seed);

    Ok(
        PlanWorkflow::new(
            CachingGenerator::new(generator, config.cache_capacity),
            ConsoleNotifier,
        )
        .with_timeout(config.generation_timeout),
    )
}

/// Run the wizard interactively.
async fn cmd_plan(config: &WorkflowConfig) -> Result<()> {
    let mut workflow = build_workflow(config)?;
    let mut displayed = false;

    loop {
        match workflow.phase() {
            WorkflowPhase::Step(step) => {
                println!();
                println!("{}", step);
                collect_step(&mut workflow, step)?;

                match prompt_step_choice(step)? {
                    StepChoice::Next => {
                        if step.next().is_none() {
                            println!("Generating your plan...");
                        }
                        workflow.advance().await;
                    }
                    StepChoice::Back => {
                        if let Transition::Navigate(NavigationTarget::ExitWorkflow) =
                            workflow.retreat()
                        {
                            println!("Leaving the planner.");
                            return Ok(());
                        }
                    }
                }
            }
            WorkflowPhase::Generating => {
                return Err(PlanError::Generation(
                    "generation did not settle".to_string(),
                ));
            }
            WorkflowPhase::Shown => {
                let result = workflow.result();
                let plan = result.generated_plan.clone().unwrap_or_else(fallback_plan);

                if !displayed {
                    display_plan(&plan, result.used_fallback());
                    displayed = true;
                }

                match prompt_plan_action()? {
                    PlanAction::ViewRecipes => {
                        if let Some(NavigationTarget::Recipes { query }) = workflow.view_recipes(None)
                        {
                            show_plan_recipes(workflow.generator().inner().catalog(), &plan, query.as_deref());
                        }
                    }
                    PlanAction::StartOver => {
                        workflow.restart();
                        displayed = false;
                    }
                    PlanAction::Save => {
                        let path = prompt_path("Save plan to", "plan.json")?;
                        save_plan(&path, &plan)?;
                        println!("Plan saved to {}", path);
                    }
                    PlanAction::Quit => return Ok(()),
                }
            }
        }
    }
}

/// Prompt for everything a step collects, re-asking on invalid input.
fn collect_step<G, N>(workflow: &mut PlanWorkflow<G, N>, step: WizardStep) -> Result<()>
where
    G: PlanGenerator,
    N: Notifier,
{
    match step {
        WizardStep::Goal => {
            let goal = prompt_goal(&workflow.state().selected_goal)?;
            workflow.select_goal(goal);
        }
        WizardStep::Diet => {
            let diet = prompt_diet(&workflow.state().diet_type)?;
            workflow.set_diet_type(diet)?;

            let chosen = prompt_restrictions(&workflow.state().restrictions)?;
            let changed: Vec<String> = workflow
                .state()
                .restrictions
                .symmetric_difference(&chosen)
                .cloned()
                .collect();
            for id in changed {
                workflow.toggle_restriction(&id);
            }
        }
        WizardStep::Meals => {
            retry_invalid(|| {
                let calories = prompt_calorie_target(workflow.state().calorie_target)?;
                workflow.set_calorie_target(calories)
            })?;
            retry_invalid(|| {
                let count = prompt_meal_count(workflow.state().meal_count)?;
                workflow.set_meal_count(count)
            })?;

            let prefs = workflow.state().meal_preferences;
            let chosen = prompt_meal_slots(&prefs)?;
            for slot in MealSlot::ALL {
                if prefs.get(slot) != chosen.contains(&slot) {
                    workflow.toggle_meal_slot(slot);
                }
            }
        }
        WizardStep::Location => {
            let location = prompt_location(&workflow.state().location)?;
            workflow.set_location(location);
            display_selections(workflow.state());
        }
    }
    Ok(())
}

/// Repeat `attempt` until it stops failing with invalid input.
fn retry_invalid<F>(mut attempt: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    loop {
        match attempt() {
            Err(PlanError::InvalidInput(message)) => println!("{}", message),
            other => return other,
        }
    }
}

/// Show catalogue details for the meals in a plan, or for a search query.
fn show_plan_recipes(catalog: &RecipeCatalog, plan: &Plan, query: Option<&str>) {
    if let Some(query) = query {
        display_recipes(&catalog.search(query), "Matching recipes");
        return;
    }

    let names: BTreeSet<String> = plan
        .days
        .iter()
        .flat_map(|d| d.meals.iter())
        .map(|m| m.name.clone())
        .collect();

    let recipes: Vec<_> = names.iter().filter_map(|n| catalog.get(n)).collect();
    display_recipes(&recipes, "Recipes in your plan");

    let missing = names.len() - recipes.len();
    if missing > 0 {
        println!("{} meal(s) are part of the starter plan and not in the catalogue.", missing);
    }
}

/// Generate a plan from flags, driving the same workflow as the wizard.
async fn cmd_generate(config: &WorkflowConfig, args: &GenerateArgs) -> Result<()> {
    let mut workflow = build_workflow(config)?;

    workflow.select_goal(resolve_option(&args.goal, GOALS, "goal")?);
    workflow.set_diet_type(resolve_option(&args.diet, DIET_TYPES, "diet")?)?;
    for restriction in &args.restrictions {
        let id = resolve_option(restriction, RESTRICTIONS, "restriction")?;
        if !workflow.state().restrictions.contains(id) {
            workflow.toggle_restriction(id);
        }
    }
    workflow.set_calorie_target(args.calories)?;
    workflow.set_meal_count(args.meal_count)?;
    for slot in &args.skip {
        let slot: MealSlot = slot.parse()?;
        if workflow.state().meal_preferences.get(slot) {
            workflow.toggle_meal_slot(slot);
        }
    }
    if args.snacks != workflow.state().meal_preferences.snacks {
        workflow.toggle_meal_slot(MealSlot::Snacks);
    }
    workflow.set_location(args.location.clone());

    let outcome = advance_to_plan(&mut workflow).await?;
    debug!(?outcome, "generation finished");

    let result = workflow.result();
    let plan = result.generated_plan.clone().unwrap_or_else(fallback_plan);
    display_plan(&plan, result.used_fallback());

    if let Some(path) = &args.output {
        save_plan(path, &plan)?;
        println!("Plan saved to {}", path.display());
    }
    if let Some(path) = &args.csv {
        export_plan_csv(&plan, path)?;
        println!("Plan exported to {}", path.display());
    }

    Ok(())
}

/// Advance through every remaining step and generate.
async fn advance_to_plan<G, N>(workflow: &mut PlanWorkflow<G, N>) -> Result<GenerationOutcome>
where
    G: PlanGenerator,
    N: Notifier,
{
    loop {
        match workflow.advance().await {
            Transition::Moved(_) => continue,
            Transition::Generated(outcome) => return Ok(outcome),
            Transition::Blocked(e) => return Err(PlanError::InvalidInput(e.to_string())),
            Transition::Navigate(target) => {
                return Err(PlanError::InvalidInput(format!(
                    "unexpected navigation to {:?}",
                    target
                )));
            }
        }
    }
}

/// Print the bundled fallback plan.
fn cmd_fallback() -> Result<()> {
    display_plan(&fallback_plan(), true);
    Ok(())
}

/// Render a saved plan.
fn cmd_show(input: &Path) -> Result<()> {
    if !input.exists() {
        eprintln!("Plan file not found: {}", input.display());
        return Ok(());
    }

    let plan = load_plan(input)?;
    plan.validate()?;
    display_plan(&plan, is_fallback(&plan));
    Ok(())
}
