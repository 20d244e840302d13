//! End-to-end run: load, derive, filter, write, report.
//!
//! Each stage is a plain function over an in-memory `Vec`, executed strictly in
//! sequence. Any I/O or CSV failure aborts the run with its context chain.

use crate::config::SieveConfig;
use crate::features::FeatureDeriver;
use crate::filter::StrictFilter;
use crate::io::csv::{read_recipes, write_recipes};
use crate::recipe::{EnrichedRecipe, RecipeRow};
use crate::report::{RunSummary, WrittenFile};
use anyhow::{Context, Result};
use std::fs::metadata;
use std::path::Path;
use tracing::info;

/// Derive features for `rows` and keep those passing `filter`, in input order.
pub fn sieve(
    rows: Vec<RecipeRow>,
    deriver: &FeatureDeriver,
    filter: &StrictFilter,
) -> Vec<EnrichedRecipe> {
    filter.apply(deriver.enrich(rows))
}

/// Run the whole sieve described by `cfg`.
///
/// The plain CSV is written before the gzip one; both carry the same rows.
///
/// # Errors
/// Fails when the source cannot be loaded or either output cannot be written.
pub fn run(cfg: &SieveConfig) -> Result<RunSummary> {
    let rows = read_recipes(&cfg.source)?;
    let total = rows.len();

    let deriver = FeatureDeriver::from_config(cfg);
    let filter = StrictFilter::from_config(cfg);
    let kept = sieve(rows, &deriver, &filter);
    let kept_easyish = kept.iter().filter(|r| r.features.is_easyish).count();
    info!(total, kept = kept.len(), kept_easyish, "filtered recipes");

    let mut files = Vec::with_capacity(2);
    for out in [&cfg.out_csv, &cfg.out_gz] {
        write_recipes(out, kept.iter().map(|r| &r.row))?;
        files.push(written(out)?);
    }

    Ok(RunSummary {
        total,
        kept: kept.len(),
        kept_easyish,
        files,
    })
}

fn written(path: &Path) -> Result<WrittenFile> {
    let meta = metadata(path).with_context(|| format!("stat {}", path.display()))?;
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: meta.len(),
    })
}
