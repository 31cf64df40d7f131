mod catalog;
mod persistence;

pub use catalog::RecipeCatalog;
pub use persistence::{bundled_recipes, load_plan, load_recipes, parse_recipes, save_plan};
