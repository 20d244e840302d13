//! Run summary and human-readable sizes.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Printed after the summary lines.
pub const USAGE_TIP: &str =
    "Tip: If the plain CSV is still too big for the web UI, use the .csv.gz with psql \\copy.";

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with 1024-based units and one decimal, e.g. `1.5KB`.
/// Anything past GB is shown in TB.
pub fn human_size(bytes: u64) -> String {
    let mut n = bytes as f64;
    for unit in UNITS {
        if n < 1024.0 {
            return format!("{n:.1}{unit}");
        }
        n /= 1024.0;
    }
    format!("{n:.1}TB")
}

/// One output file and its size on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

impl fmt::Display for WrittenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrote {} ({})", self.path.display(), human_size(self.bytes))
    }
}

/// What a completed run did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub kept: usize,
    /// Kept rows that also carry an easy/beginner tag.
    pub kept_easyish: usize,
    pub files: Vec<WrittenFile>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kept {} recipes out of {} total.", self.kept, self.total)?;
        for file in &self.files {
            writeln!(f, "{file}")?;
        }
        write!(f, "\n{USAGE_TIP}")
    }
}
