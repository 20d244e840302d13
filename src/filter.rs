//! The strict quick-and-easy predicate.

use crate::config::SieveConfig;
use crate::recipe::{DerivedFeatures, EnrichedRecipe};

/// Keeps fast, short, non-dessert recipes.
///
/// A row passes when it is fast, has at most `max_steps` steps and at most
/// `max_ingredients` ingredients, and is not dessertish. `is_easyish` plays no
/// part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrictFilter {
    pub max_steps: usize,
    pub max_ingredients: usize,
}

impl StrictFilter {
    pub fn from_config(cfg: &SieveConfig) -> Self {
        Self {
            max_steps: cfg.max_steps,
            max_ingredients: cfg.max_ingredients,
        }
    }

    pub fn matches(&self, f: &DerivedFeatures) -> bool {
        f.is_fast
            && f.steps_len <= self.max_steps
            && f.ingredients_len <= self.max_ingredients
            && !f.is_dessertish
    }

    /// Keep the matching rows, in input order.
    pub fn apply(&self, rows: Vec<EnrichedRecipe>) -> Vec<EnrichedRecipe> {
        rows.into_iter()
            .filter(|r| self.matches(&r.features))
            .collect()
    }
}

impl Default for StrictFilter {
    fn default() -> Self {
        Self::from_config(&SieveConfig::default())
    }
}
