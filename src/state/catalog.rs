use std::collections::HashMap;

use crate::models::{GenerationRequest, MealSlot, Recipe};

/// Recipes available to the local plan generator.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    /// All recipes keyed by lowercase name.
    recipes: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Build a catalogue; invalid recipes are skipped and later duplicates
    /// replace earlier ones.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes.into_iter().filter(Recipe::is_valid) {
            map.insert(recipe.key(), recipe);
        }
        Self { recipes: map }
    }

    /// Get a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&name.to_lowercase())
    }

    /// Recipes servable in `slot` that meet the request's diet and every
    /// restriction, sorted by name.
    pub fn eligible(&self, slot: MealSlot, request: &GenerationRequest) -> Vec<&Recipe> {
        let mut eligible: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|r| r.fits_slot(slot))
            .filter(|r| r.fits_diet(&request.diet_type))
            .filter(|r| request.restrictions.iter().all(|id| r.satisfies(id)))
            .collect();
        eligible.sort_by_key(|r| r.key());
        eligible
    }

    /// Case-insensitive substring search over names, sorted by name.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        let mut found: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|(key, _)| key.contains(&query))
            .map(|(_, r)| r)
            .collect();
        found.sort_by_key(|r| r.key());
        found
    }

    /// All recipes, sorted by name.
    pub fn all(&self) -> Vec<&Recipe> {
        let mut all: Vec<&Recipe> = self.recipes.values().collect();
        all.sort_by_key(|r| r.key());
        all
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WizardState;

    fn recipe(name: &str, slots: &[MealSlot], diets: &[&str], allergens: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            calories: 500.0,
            protein: 20.0,
            carbs: 60.0,
            fats: 15.0,
            slots: slots.to_vec(),
            diets: diets.iter().map(|s| s.to_string()).collect(),
            allergens: allergens.iter().map(|s| s.to_string()).collect(),
            tags: vec![],
            regions: vec![],
            description: None,
        }
    }

    fn sample_catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            recipe("Pancakes", &[MealSlot::Breakfast], &["vegetarian"], &["gluten", "egg"]),
            recipe("Tofu Scramble", &[MealSlot::Breakfast], &["vegan", "vegetarian"], &["soy"]),
            recipe("Steak", &[MealSlot::Dinner], &["keto", "paleo"], &[]),
        ])
    }

    fn request(diet: &str, restrictions: &[&str]) -> GenerationRequest {
        let mut state = WizardState::default();
        state.diet_type = diet.to_string();
        state.restrictions = restrictions.iter().map(|s| s.to_string()).collect();
        GenerationRequest::from(&state)
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.get("pancakes").is_some());
        assert!(catalog.get("PANCAKES").is_some());
        assert!(catalog.get("waffles").is_none());
    }

    #[test]
    fn test_invalid_recipes_skipped() {
        let mut broken = recipe("Nothing", &[], &[], &[]);
        broken.calories = 0.0;
        let catalog = RecipeCatalog::new(vec![broken]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_eligible_by_slot_and_diet() {
        let catalog = sample_catalog();
        let names: Vec<_> = catalog
            .eligible(MealSlot::Breakfast, &request("balanced", &[]))
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pancakes", "Tofu Scramble"]);

        let vegan = catalog.eligible(MealSlot::Breakfast, &request("vegan", &[]));
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].name, "Tofu Scramble");
    }

    #[test]
    fn test_eligible_honours_restrictions() {
        let catalog = sample_catalog();
        let eligible = catalog.eligible(MealSlot::Breakfast, &request("balanced", &["soy-free"]));
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Pancakes");

        let none = catalog.eligible(
            MealSlot::Breakfast,
            &request("balanced", &["soy-free", "gluten-free"]),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_search() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("tofu").len(), 1);
        assert_eq!(catalog.search("").len(), 3);
    }
}
