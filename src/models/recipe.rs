use serde::{Deserialize, Serialize};

use crate::models::{Meal, MealSlot};

/// A catalogue recipe with nutrition data and eligibility tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fats")]
    pub fats: f64,

    /// Slots this recipe may be served in.
    #[serde(rename = "Slots")]
    pub slots: Vec<MealSlot>,

    /// Diet types this recipe satisfies (e.g. "vegan", "keto").
    #[serde(rename = "Diets", default)]
    pub diets: Vec<String>,

    /// Allergens present, lowercase (e.g. "gluten", "dairy").
    #[serde(rename = "Allergens", default)]
    pub allergens: Vec<String>,

    /// Free-form tags such as "low-sodium".
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,

    /// Regions or cuisines the dish is common in.
    #[serde(rename = "Regions", default)]
    pub regions: Vec<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl Recipe {
    /// Protein grams per 100 kcal.
    #[inline]
    pub fn protein_density(&self) -> f64 {
        if self.calories > 0.0 {
            self.protein * 100.0 / self.calories
        } else {
            0.0
        }
    }

    /// Share of calories coming from each macro (protein, carbs, fats),
    /// using 4/4/9 kcal per gram.
    pub fn macro_split(&self) -> (f64, f64, f64) {
        let p = self.protein * 4.0;
        let c = self.carbs * 4.0;
        let f = self.fats * 9.0;
        let total = p + c + f;
        if total > 0.0 {
            (p / total, c / total, f / total)
        } else {
            (0.0, 0.0, 0.0)
        }
    }

    pub fn fits_slot(&self, slot: MealSlot) -> bool {
        self.slots.contains(&slot)
    }

    /// `balanced` accepts every recipe; other diets need a matching tag.
    pub fn fits_diet(&self, diet: &str) -> bool {
        let diet = diet.trim().to_lowercase();
        diet.is_empty()
            || diet == "balanced"
            || self.diets.iter().any(|d| d.to_lowercase() == diet)
    }

    /// Whether the recipe honours a restriction id.
    ///
    /// `<allergen>-free` ids exclude recipes listing that allergen; any other
    /// id must appear among the recipe tags.
    pub fn satisfies(&self, restriction: &str) -> bool {
        let restriction = restriction.trim().to_lowercase();
        match restriction.strip_suffix("-free") {
            Some(allergen) => !self
                .allergens
                .iter()
                .any(|a| a.to_lowercase() == allergen),
            None => self.tags.iter().any(|t| t.to_lowercase() == restriction),
        }
    }

    pub fn is_local_to(&self, location: &str) -> bool {
        let location = location.trim().to_lowercase();
        !location.is_empty()
            && self
                .regions
                .iter()
                .any(|r| location.contains(&r.to_lowercase()))
    }

    /// Basic validation: non-negative values and at least one slot.
    pub fn is_valid(&self) -> bool {
        self.calories > 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fats >= 0.0
            && !self.slots.is_empty()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn to_meal(&self, slot: MealSlot) -> Meal {
        let meal = Meal::new(
            slot,
            self.name.clone(),
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
        );
        match &self.description {
            Some(d) => meal.with_description(d.clone()),
            None => meal,
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Recipe {}

impl std::hash::Hash for Recipe {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Greek Salad".to_string(),
            calories: 400.0,
            protein: 12.0,
            carbs: 20.0,
            fats: 30.0,
            slots: vec![MealSlot::Lunch, MealSlot::Dinner],
            diets: vec!["vegetarian".to_string(), "mediterranean".to_string()],
            allergens: vec!["dairy".to_string()],
            tags: vec!["low-sodium".to_string()],
            regions: vec!["Greece".to_string(), "Europe".to_string()],
            description: None,
        }
    }

    #[test]
    fn test_protein_density() {
        assert!((sample_recipe().protein_density() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_macro_split_sums_to_one() {
        let (p, c, f) = sample_recipe().macro_split();
        assert!((p + c + f - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fits_diet() {
        let recipe = sample_recipe();
        assert!(recipe.fits_diet("balanced"));
        assert!(recipe.fits_diet("Vegetarian"));
        assert!(!recipe.fits_diet("vegan"));
    }

    #[test]
    fn test_satisfies_restrictions() {
        let recipe = sample_recipe();
        assert!(recipe.satisfies("gluten-free"));
        assert!(!recipe.satisfies("dairy-free"));
        assert!(recipe.satisfies("low-sodium"));
        assert!(!recipe.satisfies("high-fiber"));
    }

    #[test]
    fn test_is_local_to() {
        let recipe = sample_recipe();
        assert!(recipe.is_local_to("Athens, Greece"));
        assert!(!recipe.is_local_to(""));
        assert!(!recipe.is_local_to("Japan"));
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = sample_recipe();
        let mut b = sample_recipe();
        b.name = "GREEK SALAD".to_string();
        assert_eq!(a, b);
    }
}
