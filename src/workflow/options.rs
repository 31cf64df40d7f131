/// A selectable wizard option: machine id and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn opt(id: &'static str, label: &'static str) -> WizardOption {
    WizardOption { id, label }
}

pub const GOALS: &[WizardOption] = &[
    opt("weight-loss", "Lose weight"),
    opt("muscle-gain", "Build muscle"),
    opt("maintenance", "Maintain weight"),
    opt("energy", "More energy"),
    opt("heart-health", "Heart health"),
];

pub const DIET_TYPES: &[WizardOption] = &[
    opt("balanced", "Balanced"),
    opt("vegetarian", "Vegetarian"),
    opt("vegan", "Vegan"),
    opt("keto", "Keto"),
    opt("paleo", "Paleo"),
    opt("mediterranean", "Mediterranean"),
];

pub const RESTRICTIONS: &[WizardOption] = &[
    opt("gluten-free", "Gluten-free"),
    opt("dairy-free", "Dairy-free"),
    opt("nut-free", "Nut-free"),
    opt("egg-free", "Egg-free"),
    opt("soy-free", "Soy-free"),
    opt("shellfish-free", "Shellfish-free"),
    opt("low-sodium", "Low sodium"),
];

/// Look up the display label for an id, falling back to the id itself.
pub fn label_for<'a>(options: &[WizardOption], id: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.label)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(GOALS, "weight-loss"), "Lose weight");
        assert_eq!(label_for(GOALS, "custom"), "custom");
    }

    #[test]
    fn test_ids_unique() {
        for options in [GOALS, DIET_TYPES, RESTRICTIONS] {
            let mut ids: Vec<_> = options.iter().map(|o| o.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), options.len());
        }
    }
}
