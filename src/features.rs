//! Feature derivation over the JSON-encoded recipe columns.
//!
//! The evaluators here never fail: bad JSON in a cell collapses to a default
//! (`0` or `false`) or, for tags, to a plain substring search over the raw text.
//!
//! ```
//! use recipe_sieve::features::{has_any_tag, json_len, KeywordSet};
//!
//! assert_eq!(json_len(Some(r#"["a","b","c"]"#)), 3);
//! assert_eq!(json_len(Some("{}")), 0);
//!
//! let fast = KeywordSet::new(["15-minutes-or-less"]);
//! assert!(has_any_tag(Some(r#"["15-minutes-or-less","easy"]"#), &fast));
//! ```

use crate::config::SieveConfig;
use crate::recipe::{DerivedFeatures, EnrichedRecipe, RecipeRow};
use serde_json::Value;
use tracing::debug;

/// Number of elements in a JSON array held as text.
///
/// Returns `0` when the value is missing, blank, not valid JSON, or valid JSON
/// that is not an array.
pub fn json_len(value: Option<&str>) -> usize {
    let Some(text) = value.filter(|t| !t.trim().is_empty()) else {
        return 0;
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

/// Ingredient count for a row: `raw` when it evaluates to a positive length,
/// otherwise `fallback`.
pub fn ingredients_len(raw: Option<&str>, fallback: Option<&str>) -> usize {
    match json_len(raw) {
        0 => json_len(fallback),
        n => n,
    }
}

/// Lower-cased keywords searched for as substrings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }

    /// True when any keyword occurs in `haystack`. The haystack must already be
    /// lower-cased.
    pub fn any_in(&self, haystack: &str) -> bool {
        self.0.iter().any(|k| haystack.contains(k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether a JSON array of tags mentions any of `keywords`.
///
/// Tags are lower-cased and joined with single spaces before matching, so a
/// keyword can match inside a tag or across a tag boundary. Text that is not
/// JSON at all is matched as-is (lower-cased). JSON that is not an array never
/// matches, and neither does a missing or blank value.
pub fn has_any_tag(tags: Option<&str>, keywords: &KeywordSet) -> bool {
    let Some(text) = tags.filter(|t| !t.trim().is_empty()) else {
        return false;
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => {
            let haystack = items
                .iter()
                .map(tag_text)
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            keywords.any_in(&haystack)
        }
        Ok(_) => false,
        Err(err) => {
            debug!(error = %err, "tags are not JSON, matching raw text");
            keywords.any_in(&text.to_lowercase())
        }
    }
}

// Non-string tags are compared in their compact JSON form.
fn tag_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Computes [`DerivedFeatures`] for recipe rows.
#[derive(Clone, Debug)]
pub struct FeatureDeriver {
    fast: KeywordSet,
    easy: KeywordSet,
    dessert: KeywordSet,
}

impl FeatureDeriver {
    pub fn new(fast: KeywordSet, easy: KeywordSet, dessert: KeywordSet) -> Self {
        Self {
            fast,
            easy,
            dessert,
        }
    }

    pub fn from_config(cfg: &SieveConfig) -> Self {
        Self::new(
            KeywordSet::new(&cfg.fast_keywords),
            KeywordSet::new(&cfg.easy_keywords),
            KeywordSet::new(&cfg.dessert_keywords),
        )
    }

    pub fn derive(&self, row: &RecipeRow) -> DerivedFeatures {
        let tags = row.tags.as_deref();
        DerivedFeatures {
            steps_len: json_len(row.steps.as_deref()),
            ingredients_len: ingredients_len(
                row.ingredients_raw.as_deref(),
                row.ingredients.as_deref(),
            ),
            is_fast: has_any_tag(tags, &self.fast),
            is_easyish: has_any_tag(tags, &self.easy),
            is_dessertish: has_any_tag(tags, &self.dessert),
        }
    }

    /// Pair every row with its features, keeping input order.
    pub fn enrich(&self, rows: Vec<RecipeRow>) -> Vec<EnrichedRecipe> {
        rows.into_iter()
            .map(|row| {
                let features = self.derive(&row);
                EnrichedRecipe { row, features }
            })
            .collect()
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::from_config(&SieveConfig::default())
    }
}
