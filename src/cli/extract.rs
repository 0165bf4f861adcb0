//! Extract command - dump content signals

use anyhow::{Context, Result};
use std::path::Path;

pub fn run(file: &Path, url: Option<&str>) -> Result<()> {
    let markup = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let signals = readiness::extract(&markup, url);
    println!("{}", serde_json::to_string_pretty(&signals)?);
    Ok(())
}
