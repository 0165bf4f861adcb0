//! JSON reporter
//!
//! Outputs the full ScoreReport as pretty-printed JSON.

use crate::models::ScoreReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["overall"], report.overall);
        assert_eq!(parsed["pillars"].as_array().expect("pillars array").len(), 5);
        assert!(parsed["suggestions"].is_array());
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: ScoreReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(back, report);
    }
}
