//! # recipe-sieve
//!
//! Narrows a recipe table to quick, low-effort, non-dessert recipes.
//!
//! A run is a single in-memory batch:
//! 1. **Load** the source CSV into [`RecipeRow`]s ([`io::csv::read_recipes`]).
//! 2. **Derive** step/ingredient counts and tag flags per row ([`FeatureDeriver`]).
//! 3. **Filter** with the fixed [`StrictFilter`] predicate.
//! 4. **Write** the kept rows, trimmed to seven columns, as plain CSV and as gzip
//!    CSV ([`io::csv::write_recipes`]), then report counts and sizes ([`RunSummary`]).
//!
//! Malformed JSON inside a cell never fails a run; it degrades to `0`, `false`,
//! or a raw-text substring match (see [`features`]). Failing to read the source
//! or to write an output is fatal.
//!
//! ## Example
//!
//! ```no_run
//! use recipe_sieve::{SieveConfig, run};
//!
//! # fn main() -> anyhow::Result<()> {
//! let summary = run(&SieveConfig::with_paths("in.csv", "out.csv", "out.csv.gz"))?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - paths, thresholds and keyword lists
//! - [`recipe`] - row, projection and feature types
//! - [`features`] - JSON length and tag membership evaluators
//! - [`filter`] - the strict predicate
//! - [`io`] - CSV reading/writing with transparent gzip
//! - [`pipeline`] - the end-to-end run
//! - [`report`] - run summary and size formatting

pub mod config;
pub mod features;
pub mod filter;
pub mod io;
pub mod pipeline;
pub mod recipe;
pub mod report;

pub use config::SieveConfig;
pub use features::{FeatureDeriver, KeywordSet, has_any_tag, ingredients_len, json_len};
pub use filter::StrictFilter;
pub use io::csv::{read_recipes, write_recipes};
pub use pipeline::{run, sieve};
pub use recipe::{DerivedFeatures, EnrichedRecipe, RecipeRecord, RecipeRow};
pub use report::{RunSummary, WrittenFile, human_size};
