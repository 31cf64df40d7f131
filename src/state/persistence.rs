use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Plan, Recipe};

/// Recipe catalogue compiled into the binary.
const BUNDLED_RECIPES: &str = include_str!("../../data/recipes.json");

/// Parse recipes from JSON text.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;

    let mut seen: HashMap<String, Recipe> = HashMap::new();
    for recipe in recipes {
        seen.insert(recipe.key(), recipe);
    }

    Ok(seen.into_values().collect())
}

/// Load recipes from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    parse_recipes(&content)
}

/// The catalogue shipped with the application.
pub fn bundled_recipes() -> Result<Vec<Recipe>> {
    parse_recipes(BUNDLED_RECIPES)
}

/// Save a plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
