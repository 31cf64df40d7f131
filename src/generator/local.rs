use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::generator::constants::TIE_EPSILON;
use crate::generator::scoring::{
    calorie_fit, calorie_shares, daily_slots, goal_bias, location_bias, repetition_penalty,
};
use crate::generator::PlanGenerator;
use crate::models::{Day, GenerationRequest, MealSlot, Plan, Recipe};
use crate::state::RecipeCatalog;
use crate::workflow::constants::{DEFAULT_PLAN_DAYS, DEFAULT_SEED, MAX_PLAN_DAYS};

/// Candidate recipe with its computed score.
#[derive(Debug)]
struct Candidate<'a> {
    recipe: &'a Recipe,
    rank_score: f64,
}

/// Offline plan generator that assembles days from a recipe catalogue.
#[derive(Debug, Clone)]
pub struct LocalPlanGenerator {
    catalog: RecipeCatalog,
    days: u32,
    seed: u64,
}

impl LocalPlanGenerator {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog,
            days: DEFAULT_PLAN_DAYS,
            seed: DEFAULT_SEED,
        }
    }

    /// Plan length, clamped to `1..=MAX_PLAN_DAYS`.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days.clamp(1, MAX_PLAN_DAYS);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Build a plan synchronously.
    ///
    /// Every day gets one meal per planned slot. Recipes already served
    /// that day are avoided while alternatives remain.
    pub fn build_plan(&self, request: &GenerationRequest) -> Result<Plan> {
        let slots = daily_slots(&request.meal_preferences, request.meal_count);
        if slots.is_empty() {
            return Err(PlanError::InvalidInput(
                "no meal slots selected".to_string(),
            ));
        }

        let shares = calorie_shares(&slots, request.calorie_target as f64);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut usage: HashMap<String, u32> = HashMap::new();
        let mut days = Vec::with_capacity(self.days as usize);

        for index in 1..=self.days {
            let mut meals = Vec::with_capacity(slots.len());
            let mut served_today: HashSet<String> = HashSet::new();

            for (slot, target) in slots.iter().zip(&shares) {
                let recipe = self
                    .choose_recipe(*slot, *target, request, &usage, &served_today, &mut rng)
                    .ok_or(PlanError::NoEligibleRecipes(*slot))?;

                *usage.entry(recipe.key()).or_insert(0) += 1;
                served_today.insert(recipe.key());
                meals.push(recipe.to_meal(*slot));
            }

            days.push(Day::new(index, meals));
        }

        debug!(days = days.len(), per_day = slots.len(), "local plan built");
        Ok(Plan::new(days))
    }

    /// Choose the best recipe for one meal.
    ///
    /// 1. Score eligible recipes: calorie fit + goal + location − repetition
    /// 2. Keep near-equal candidates within TIE_EPSILON of the best
    /// 3. Break the tie with seeded jitter
    fn choose_recipe(
        &self,
        slot: MealSlot,
        target: f64,
        request: &GenerationRequest,
        usage: &HashMap<String, u32>,
        served_today: &HashSet<String>,
        rng: &mut StdRng,
    ) -> Option<&Recipe> {
        let eligible = self.catalog.eligible(slot, request);
        if eligible.is_empty() {
            return None;
        }

        let fresh: Vec<&Recipe> = eligible
            .iter()
            .copied()
            .filter(|r| !served_today.contains(&r.key()))
            .collect();
        let pool = if fresh.is_empty() { eligible } else { fresh };

        let candidates: Vec<Candidate> = pool
            .into_iter()
            .map(|recipe| {
                let times_used = usage.get(&recipe.key()).copied().unwrap_or(0);
                let rank_score = calorie_fit(recipe.calories, target)
                    + goal_bias(&request.goal, recipe)
                    + location_bias(recipe, request.location.as_deref())
                    + repetition_penalty(times_used);
                Candidate { recipe, rank_score }
            })
            .collect();

        let best_rank = candidates
            .iter()
            .map(|c| c.rank_score)
            .fold(f64::NEG_INFINITY, f64::max);

        let threshold = best_rank - TIE_EPSILON;

        candidates
            .iter()
            .filter(|c| c.rank_score >= threshold)
            .map(|c| (c, c.rank_score + rng.gen_range(0.0..TIE_EPSILON)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| c.recipe)
    }
}

#[async_trait]
impl PlanGenerator for LocalPlanGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Plan> {
        self.build_plan(request)
    }
}
