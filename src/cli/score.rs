//! Score command - extract and score HTML files

use anyhow::{Context, Result};
use rayon::prelude::*;
use readiness::config::{load_config, load_config_file};
use readiness::reporters::{self, OutputFormat};
use readiness::{ExternalSignalSummary, PillarScorer, ScoreReport, ScoringConfig};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub fn run(
    files: &[PathBuf],
    url: Option<&str>,
    external: Option<&Path>,
    format: &str,
    config: Option<&Path>,
    explain: bool,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let config = match config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(&std::env::current_dir()?),
    };
    let external = external.map(load_external).transpose()?;

    let reports = score_files(files, url, external.as_ref(), &config)?;
    info!("Scored {} page(s)", reports.len());

    print!("{}", render(&reports, format, explain.then_some(&config))?);
    Ok(())
}

fn load_external(path: &Path) -> Result<ExternalSignalSummary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ExternalSignalSummary::from_json_str(&json)
        .with_context(|| format!("Invalid external signals in {}", path.display()))
}

/// Score every file in parallel; results keep argument order
fn score_files(
    files: &[PathBuf],
    url: Option<&str>,
    external: Option<&ExternalSignalSummary>,
    config: &ScoringConfig,
) -> Result<Vec<(PathBuf, ScoreReport)>> {
    files
        .par_iter()
        .map(|path| -> Result<(PathBuf, ScoreReport)> {
            let markup = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let signals = readiness::extract(&markup, url);
            let report = PillarScorer::new(config).calculate(&signals, external);
            Ok((path.clone(), report))
        })
        .collect()
}

fn render(
    reports: &[(PathBuf, ScoreReport)],
    format: OutputFormat,
    explain: Option<&ScoringConfig>,
) -> Result<String> {
    if format == OutputFormat::Json {
        return render_json(reports);
    }

    let mut out = String::new();
    for (path, report) in reports {
        if reports.len() > 1 {
            out.push_str(&format!("==> {} <==\n", path.display()));
        }
        out.push_str(&reporters::report_with_format(report, format)?);
        if let Some(config) = explain {
            out.push('\n');
            out.push_str(&PillarScorer::new(config).explain(report));
            out.push('\n');
        }
    }
    Ok(out)
}

/// One report prints bare; several print as `[{file, report}]`
fn render_json(reports: &[(PathBuf, ScoreReport)]) -> Result<String> {
    if let [(_, report)] = reports {
        return Ok(reporters::report_with_format(report, OutputFormat::Json)? + "\n");
    }
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .map(|(path, report)| -> Result<serde_json::Value> {
            Ok(serde_json::json!({
                "file": path.display().to_string(),
                "report": serde_json::to_value(report)?,
            }))
        })
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&entries)? + "\n")
}
