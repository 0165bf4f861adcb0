//! Scoring configuration support
//!
//! Loads optional overrides from `readiness.toml` or `.readinessrc.json`.
//! Every field has a default, and the defaults reproduce the stock scoring
//! model exactly, so an absent or partial file is always fine.
//!
//! # Configuration Format
//!
//! ```toml
//! # readiness.toml
//!
//! [pillar_weights]
//! product = 30
//! category = 20
//! depth = 25
//! technical = 20
//! offsite = 5
//!
//! [thresholds]
//! alt_coverage = 0.7
//! min_words = 500
//! min_internal_links = 10
//! offsite_points_per_source = 20
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Pillar;

/// Largest accepted weight for a single pillar
pub const MAX_PILLAR_WEIGHT: u32 = 10_000;

/// File names checked by [`load_config`], in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["readiness.toml", ".readinessrc.json"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Top-level scoring configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub pillar_weights: PillarWeights,
    pub thresholds: Thresholds,
}

/// Share of each pillar in the overall blend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarWeights {
    pub product: u32,
    pub category: u32,
    pub depth: u32,
    pub technical: u32,
    pub offsite: u32,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            product: 30,
            category: 20,
            depth: 25,
            technical: 20,
            offsite: 5,
        }
    }
}

impl PillarWeights {
    pub fn weight(&self, pillar: Pillar) -> u32 {
        match pillar {
            Pillar::ProductPage => self.product,
            Pillar::CategoryGuides => self.category,
            Pillar::ContentDepth => self.depth,
            Pillar::Technical => self.technical,
            Pillar::OffSite => self.offsite,
        }
    }

    /// Sum of all weights, widened so it cannot overflow
    pub fn total(&self) -> u64 {
        Pillar::ALL.iter().map(|p| u64::from(self.weight(*p))).sum()
    }

    /// At least one pillar carries weight and none exceeds [`MAX_PILLAR_WEIGHT`]
    pub fn is_valid(&self) -> bool {
        self.total() > 0 && Pillar::ALL.iter().all(|p| self.weight(*p) <= MAX_PILLAR_WEIGHT)
    }
}

/// Numeric cut-offs used by individual checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum alt-text ratio for the `alt` check
    pub alt_coverage: f64,
    /// Minimum body word count for the `length` check
    pub min_words: usize,
    /// Minimum internal links for the `links` check
    pub min_internal_links: usize,
    /// Off-site points per source with a positive count (capped at 100)
    pub offsite_points_per_source: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alt_coverage: 0.7,
            min_words: 500,
            min_internal_links: 10,
            offsite_points_per_source: 20,
        }
    }
}

impl ScoringConfig {
    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        if !self.pillar_weights.is_valid() {
            warn!(
                "Pillar weights must not all be zero and each must be at most {}; using default weights",
                MAX_PILLAR_WEIGHT
            );
            self.pillar_weights = PillarWeights::default();
        }
        let alt = self.thresholds.alt_coverage;
        if !alt.is_finite() || !(0.0..=1.0).contains(&alt) {
            warn!("alt_coverage threshold {} outside 0..=1; using default", alt);
            self.thresholds.alt_coverage = Thresholds::default().alt_coverage;
        }
        self
    }
}

/// Load a config from an explicit path (format picked by extension)
pub fn load_config_file(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let config: ScoringConfig = match ext.as_deref() {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(config.sanitized())
}

/// Discover a config file in `dir`, falling back to defaults.
///
/// A malformed file is logged and skipped rather than treated as fatal.
pub fn load_config(dir: &Path) -> ScoringConfig {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded scoring config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No scoring config found, using defaults");
    ScoringConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let weights = PillarWeights::default();
        assert_eq!(weights.total(), 100);
        assert_eq!(weights.weight(Pillar::ContentDepth), 25);
    }

    #[test]
    fn test_partial_toml() {
        let config: ScoringConfig = toml::from_str(
            r#"
            [thresholds]
            min_words = 300
            "#,
        )
        .expect("parse");
        assert_eq!(config.thresholds.min_words, 300);
        assert_eq!(config.thresholds.min_internal_links, 10);
        assert_eq!(config.pillar_weights, PillarWeights::default());
    }

    #[test]
    fn test_zero_weights_sanitized() {
        let config = ScoringConfig {
            pillar_weights: PillarWeights {
                product: 0,
                category: 0,
                depth: 0,
                technical: 0,
                offsite: 0,
            },
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.pillar_weights, PillarWeights::default());
    }

    #[test]
    fn test_huge_weights_sanitized() {
        let weights = PillarWeights {
            product: u32::MAX,
            category: u32::MAX,
            ..Default::default()
        };
        assert!(weights.total() > u64::from(u32::MAX));
        assert!(!weights.is_valid());

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("readiness.toml");
        std::fs::write(&path, "[pillar_weights]\nproduct = 4000000000\ncategory = 1000000000\n")
            .expect("write");
        let config = load_config_file(&path).expect("load");
        assert_eq!(config.pillar_weights, PillarWeights::default());
    }

    #[test]
    fn test_max_weight_accepted() {
        let weights = PillarWeights {
            product: MAX_PILLAR_WEIGHT,
            ..Default::default()
        };
        assert!(weights.is_valid());
        let config = ScoringConfig {
            pillar_weights: weights.clone(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.pillar_weights, weights);
    }

    #[test]
    fn test_bad_alt_threshold_sanitized() {
        let mut config = ScoringConfig::default();
        config.thresholds.alt_coverage = 1.5;
        assert_eq!(config.sanitized().thresholds.alt_coverage, 0.7);
    }

    #[test]
    fn test_load_config_discovery() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_config(dir.path()), ScoringConfig::default());

        std::fs::write(
            dir.path().join(".readinessrc.json"),
            r#"{"pillar_weights": {"offsite": 10}}"#,
        )
        .expect("write");
        assert_eq!(load_config(dir.path()).pillar_weights.offsite, 10);

        // TOML wins over JSON
        std::fs::write(dir.path().join("readiness.toml"), "[pillar_weights]\noffsite = 15\n")
            .expect("write");
        assert_eq!(load_config(dir.path()).pillar_weights.offsite, 15);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("readiness.toml"), "[pillar_weights\n").expect("write");
        assert_eq!(load_config(dir.path()), ScoringConfig::default());
    }

    #[test]
    fn test_explicit_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let yaml = dir.path().join("readiness.yaml");
        std::fs::write(&yaml, "a: 1").expect("write");
        assert!(matches!(
            load_config_file(&yaml),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            load_config_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
