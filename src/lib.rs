//! Readiness - content-readiness scoring engine
//!
//! Extracts structured signals from a web page (headings, schema markup,
//! image alt coverage, internal links, review signals) and scores them
//! across five weighted pillars with actionable suggestions.
//!
//! Both stages are pure functions: no I/O, no shared state, safe to call
//! concurrently on independent pages.
//!
//! # Example
//!
//! ```
//! use readiness::{analyze, ExternalSignalSummary};
//!
//! let html = "<html><head><title>Widget</title></head><body><h1>Buy Widget</h1></body></html>";
//! let report = analyze(html, Some("https://shop.example.com/widget"), None);
//! assert!(report.overall <= 100);
//!
//! let ext = ExternalSignalSummary::default().with_count("trustpilot", 3);
//! let report = analyze(html, None, Some(&ext));
//! assert_eq!(report.pillars[4].score, 20);
//! ```

pub mod config;
pub mod extract;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use config::ScoringConfig;
pub use extract::extract;
pub use models::{
    ContentSignals, ExternalSignalSummary, ImageAltCoverage, InternalLink, Pillar, PillarCheck,
    PillarScore, ScoreReport, SuggestionSet,
};
pub use scoring::{score, score_with_config, PillarScorer};

/// Extract signals from markup and score them with the default configuration
pub fn analyze(
    markup: &str,
    source_url: Option<&str>,
    external: Option<&ExternalSignalSummary>,
) -> ScoreReport {
    score(&extract(markup, source_url), external)
}
