//! Recipe rows as loaded, derived, and written.

use serde::{Deserialize, Serialize};

/// One row of the source table.
///
/// The JSON-bearing columns stay as raw text. An empty cell loads as `None`, and
/// `ingredients_raw` is `None` for every row when the column is absent.
/// Columns not named here are dropped at load time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Option<String>,
    #[serde(default)]
    pub ingredients_raw: Option<String>,
    pub steps: Option<String>,
    pub tags: Option<String>,
}

impl RecipeRow {
    /// Borrow the columns that get persisted.
    pub fn record(&self) -> RecipeRecord<'_> {
        RecipeRecord {
            id: &self.id,
            name: &self.name,
            description: &self.description,
            ingredients: self.ingredients.as_deref(),
            ingredients_raw: self.ingredients_raw.as_deref(),
            steps: self.steps.as_deref(),
            tags: self.tags.as_deref(),
        }
    }
}

/// Projection of a [`RecipeRow`] onto the output columns, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecipeRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub ingredients: Option<&'a str>,
    pub ingredients_raw: Option<&'a str>,
    pub steps: Option<&'a str>,
    pub tags: Option<&'a str>,
}

impl RecipeRecord<'_> {
    /// Header of both output files. Must follow the field order above.
    pub const COLUMNS: [&'static str; 7] = [
        "id",
        "name",
        "description",
        "ingredients",
        "ingredients_raw",
        "steps",
        "tags",
    ];
}

/// Per-row values computed from the JSON columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedFeatures {
    pub steps_len: usize,
    /// `ingredients_raw` length when positive, otherwise `ingredients` length.
    pub ingredients_len: usize,
    pub is_fast: bool,
    /// Not used by the filter.
    pub is_easyish: bool,
    pub is_dessertish: bool,
}

/// A source row paired with its derived features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedRecipe {
    pub row: RecipeRow,
    pub features: DerivedFeatures,
}
