//! CSV loading and writing for recipe tables.
//!
//! - [`read_csv_vec`] is the generic Serde-backed reader.
//! - [`read_recipes`] loads a recipe table and checks the required header columns.
//! - [`write_recipes`] writes the trimmed 7-column projection.
//!
//! Both directions go through [`crate::io::compression`], so a `.gz` path is
//! compressed on write and decompressed on read.

use crate::io::compression::{EncodedWrite, auto_detect_reader, auto_detect_writer};
use crate::recipe::{RecipeRecord, RecipeRow};
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use std::fs::{File, create_dir_all};
use std::path::Path;
use tracing::info;

/// Columns that must be present in a source header. `ingredients_raw` is
/// optional.
pub const REQUIRED_COLUMNS: [&str; 6] = ["id", "name", "description", "ingredients", "steps", "tags"];

/// Read a CSV file into a typed `Vec<T>`.
///
/// Rows are deserialized with Serde. If `has_headers` is `true`, the first row is
/// the header and fields are matched to `T` by name.
///
/// # Errors
/// Returns an error if the file cannot be opened or if any row fails to parse
/// or deserialize. The error names the 1-based record number.
pub fn read_csv_vec<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    has_headers: bool,
) -> Result<Vec<T>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut rdr = ReaderBuilder::new().has_headers(has_headers).from_reader(rdr);
    let mut out = Vec::<T>::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        let v = rec.with_context(|| format!("parse CSV record #{} in {}", i + 1, path.display()))?;
        out.push(v);
    }
    Ok(out)
}

/// Load every row of a recipe table, in file order.
///
/// # Errors
/// Fails if the file is missing or unreadable, if the header lacks any of
/// [`REQUIRED_COLUMNS`], or if any record is malformed. Nothing is returned on
/// failure; there is no partial load.
pub fn read_recipes(path: impl AsRef<Path>) -> Result<Vec<RecipeRow>> {
    let path = path.as_ref();
    check_header(path)?;
    let rows: Vec<RecipeRow> = read_csv_vec(path, true)?;
    info!(path = %path.display(), rows = rows.len(), "loaded recipes");
    Ok(rows)
}

fn check_header(path: &Path) -> Result<()> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let header = rdr
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?;
    for col in REQUIRED_COLUMNS {
        if !header.iter().any(|h| h == col) {
            bail!("missing column `{}` in {}", col, path.display());
        }
    }
    Ok(())
}

/// Write rows as the trimmed 7-column table.
///
/// * The header is always written, also for zero rows.
/// * Cells are quoted where needed, so JSON text survives intact.
/// * Parent directories are created if missing.
/// * A `.gz` path produces a gzip stream.
///
/// # Returns
/// The number of data rows written.
///
/// # Errors
/// Returns an error if the file cannot be created or any write, flush, or
/// stream finish fails. A partially written file is left in place.
pub fn write_recipes<'a>(
    path: impl AsRef<Path>,
    rows: impl IntoIterator<Item = &'a RecipeRow>,
) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let w = auto_detect_writer(f, path)
        .with_context(|| format!("setup compression for {}", path.display()))?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(w);
    wtr.write_record(RecipeRecord::COLUMNS)
        .with_context(|| format!("write header to {}", path.display()))?;

    let mut written = 0usize;
    for row in rows {
        wtr.serialize(row.record())
            .with_context(|| format!("serialize CSV row #{} to {}", written + 1, path.display()))?;
        written += 1;
    }

    let sink = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flush {}", path.display()))?;
    sink.close()
        .with_context(|| format!("finish stream for {}", path.display()))?;
    info!(path = %path.display(), rows = written, "wrote recipes");
    Ok(written)
}
