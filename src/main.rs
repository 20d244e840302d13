//! recipe-sieve binary.
//!
//! Reads `recipes_easy_strict.csv` from the working directory and writes the
//! quick-and-easy subset next to it. There are no flags; `RUST_LOG` only tunes
//! log verbosity on stderr.

use anyhow::Result;
use recipe_sieve::{SieveConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = SieveConfig::default();
    println!("Loading CSV (this may take a bit)...");
    let summary = run(&cfg)?;
    println!("{summary}");
    Ok(())
}
