//! Fixed run configuration.
//!
//! Every knob of the sieve lives here as a constant. [`SieveConfig::default`] is
//! what the binary runs with; tests build their own value to point the pipeline
//! at temporary paths.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source table read by the binary.
pub const SOURCE_PATH: &str = "recipes_easy_strict.csv";
/// Plain CSV output.
pub const OUT_CSV_PATH: &str = "recipes_easiest_strict.csv";
/// Gzip CSV output.
pub const OUT_GZ_PATH: &str = "recipes_easiest_strict.csv.gz";

/// Upper bound (inclusive) on the number of steps.
pub const MAX_STEPS: usize = 5;
/// Upper bound (inclusive) on the number of ingredients.
pub const MAX_INGREDIENTS: usize = 6;

/// Tags marking a recipe as quick to make.
pub const FAST_KEYWORDS: &[&str] = &["15-minutes-or-less", "30-minutes-or-less"];

/// Tags marking a recipe as beginner friendly. Derived for diagnostics only.
pub const EASY_KEYWORDS: &[&str] = &["easy", "beginner-cook"];

/// Tags marking a recipe as a dessert.
pub const DESSERT_KEYWORDS: &[&str] = &[
    "dessert",
    "cakes",
    "cookies",
    "candy",
    "fudge",
    "cupcakes",
    "brownies",
    "pies-and-tarts",
    "ice-cream",
    "frozen-desserts",
    "bar-cookies",
];

/// Everything one run of the sieve needs to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveConfig {
    pub source: PathBuf,
    pub out_csv: PathBuf,
    pub out_gz: PathBuf,
    pub max_steps: usize,
    pub max_ingredients: usize,
    pub fast_keywords: Vec<String>,
    pub easy_keywords: Vec<String>,
    pub dessert_keywords: Vec<String>,
}

impl SieveConfig {
    /// Default thresholds and keywords, reading and writing the given paths.
    pub fn with_paths(
        source: impl Into<PathBuf>,
        out_csv: impl Into<PathBuf>,
        out_gz: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            out_csv: out_csv.into(),
            out_gz: out_gz.into(),
            max_steps: MAX_STEPS,
            max_ingredients: MAX_INGREDIENTS,
            fast_keywords: owned(FAST_KEYWORDS),
            easy_keywords: owned(EASY_KEYWORDS),
            dessert_keywords: owned(DESSERT_KEYWORDS),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self::with_paths(SOURCE_PATH, OUT_CSV_PATH, OUT_GZ_PATH)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let cfg = SieveConfig::default();
        assert_eq!(cfg.source, PathBuf::from(SOURCE_PATH));
        assert_eq!(cfg.max_steps, 5);
        assert_eq!(cfg.max_ingredients, 6);
        assert_eq!(cfg.dessert_keywords.len(), 11);
        assert_eq!(cfg.fast_keywords, vec!["15-minutes-or-less", "30-minutes-or-less"]);
    }

    #[test]
    fn with_paths_keeps_thresholds() {
        let cfg = SieveConfig::with_paths("in.csv", "out.csv", "out.csv.gz");
        assert_eq!(cfg.out_gz, PathBuf::from("out.csv.gz"));
        assert_eq!(cfg.max_steps, MAX_STEPS);
        assert_eq!(cfg.easy_keywords, vec!["easy", "beginner-cook"]);
    }
}
