//! Configuration module
//!
//! Optional scoring overrides: pillar blend weights and check thresholds.

mod scoring_config;

pub use scoring_config::{
    load_config,
    load_config_file,
    ConfigError,
    PillarWeights,
    ScoringConfig,
    Thresholds,
    CONFIG_FILE_NAMES,
    MAX_PILLAR_WEIGHT,
};
