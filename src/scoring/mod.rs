//! Pillar-based readiness scoring
//!
//! Evaluates five fixed pillars of weighted checks over a page's
//! [`ContentSignals`] and blends them into one 0-100 score.
//!
//! # Scoring Formula
//!
//! ```text
//! Pillar  = round(100 × Σ weight(passed) / max(1, Σ weight(all)))
//! Overall = round(Σ Pillarᵢ × Wᵢ / Σ Wᵢ)      W = [30, 20, 25, 20, 5]
//! ```
//!
//! # Off-Site exception
//!
//! When the caller supplies an [`ExternalSignalSummary`], the Off-Site
//! pillar is scored per source instead of by check weight:
//!
//! ```text
//! Off-Site = min(100, 20 × sources with a positive count)
//! ```
//!
//! The single `externalReviews` check is still reported, but its weight
//! does not feed the pillar score in that branch.

mod checks;
mod suggestions;
pub mod vocab;

pub use suggestions::suggestion_for;

use crate::config::ScoringConfig;
use crate::models::{
    ContentSignals, ExternalSignalSummary, Pillar, PillarCheck, PillarScore, ScoreReport,
    SuggestionSet,
};
use tracing::{debug, info};

/// How a pillar turns its checks into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillarRule {
    /// Weighted share of passed checks
    Weighted,
    /// Fixed points per positive external source, capped at 100
    SourceCount {
        positive_sources: usize,
        points_per_source: u32,
    },
}

impl PillarRule {
    pub fn score(&self, checks: &[PillarCheck]) -> u32 {
        match *self {
            PillarRule::Weighted => {
                let total: u32 = checks.iter().map(|c| c.weight).sum();
                let passed: u32 = checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
                round_ratio(100 * u64::from(passed), u64::from(total.max(1)))
            }
            PillarRule::SourceCount {
                positive_sources,
                points_per_source,
            } => {
                let points = (positive_sources as u64).saturating_mul(points_per_source as u64);
                points.min(100) as u32
            }
        }
    }
}

/// Round `num / den` to the nearest integer, halves rounding up
fn round_ratio(num: u64, den: u64) -> u32 {
    ((num as f64) / (den as f64)).round() as u32
}

/// Score signals with the default configuration
pub fn score(signals: &ContentSignals, external: Option<&ExternalSignalSummary>) -> ScoreReport {
    PillarScorer::new(&ScoringConfig::default()).calculate(signals, external)
}

/// Score signals with an explicit configuration
pub fn score_with_config(
    signals: &ContentSignals,
    external: Option<&ExternalSignalSummary>,
    config: &ScoringConfig,
) -> ScoreReport {
    PillarScorer::new(config).calculate(signals, external)
}

/// Pillar scorer bound to a configuration
pub struct PillarScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> PillarScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Evaluate every pillar and assemble the report
    pub fn calculate(
        &self,
        signals: &ContentSignals,
        external: Option<&ExternalSignalSummary>,
    ) -> ScoreReport {
        let t = &self.config.thresholds;

        let pillars: Vec<PillarScore> = Pillar::ALL
            .iter()
            .map(|&pillar| {
                let checks = match pillar {
                    Pillar::ProductPage => checks::product_page(signals, t),
                    Pillar::CategoryGuides => checks::category_guides(signals, t),
                    Pillar::ContentDepth => checks::content_depth(signals, t),
                    Pillar::Technical => checks::technical(signals),
                    Pillar::OffSite => checks::off_site(signals, external),
                };
                let rule = self.rule_for(pillar, external);
                self.build_pillar(pillar, rule, checks)
            })
            .collect();

        let overall = self.blend(&pillars);
        let suggestions = collect_suggestions(&pillars);

        info!(
            "Readiness score: {} - Product: {}, Category: {}, Depth: {}, Technical: {}, Off-Site: {}",
            overall, pillars[0].score, pillars[1].score, pillars[2].score, pillars[3].score, pillars[4].score
        );

        ScoreReport {
            overall,
            pillars,
            suggestions,
        }
    }

    /// Scoring rule for a pillar given the available evidence
    pub fn rule_for(&self, pillar: Pillar, external: Option<&ExternalSignalSummary>) -> PillarRule {
        match (pillar, external) {
            (Pillar::OffSite, Some(ext)) => PillarRule::SourceCount {
                positive_sources: ext.positive_sources(),
                points_per_source: self.config.thresholds.offsite_points_per_source,
            },
            _ => PillarRule::Weighted,
        }
    }

    fn build_pillar(&self, pillar: Pillar, rule: PillarRule, checks: Vec<PillarCheck>) -> PillarScore {
        let score = rule.score(&checks);
        debug!(
            "{}: {} ({} of {} checks passed, {:?})",
            pillar,
            score,
            checks.iter().filter(|c| c.passed).count(),
            checks.len(),
            rule
        );
        PillarScore {
            pillar,
            name: pillar.name().to_string(),
            score,
            checks,
        }
    }

    /// Weighted blend of pillar scores
    fn blend(&self, pillars: &[PillarScore]) -> u32 {
        let weights = &self.config.pillar_weights;
        let total = weights.total().max(1);
        let weighted: u64 = pillars
            .iter()
            .map(|p| u64::from(p.score) * u64::from(weights.weight(p.pillar)))
            .sum();
        round_ratio(weighted, total).min(100)
    }

    /// Generate a human-readable explanation of the score
    pub fn explain(&self, report: &ScoreReport) -> String {
        let weights = &self.config.pillar_weights;
        let mut lines = Vec::new();

        lines.push(format!(
            "# Readiness Score: {} ({})\n",
            report.overall,
            report.grade()
        ));

        lines.push("## Scoring Formula\n".to_string());
        lines.push("```".to_string());
        let terms: Vec<String> = Pillar::ALL
            .iter()
            .map(|p| format!("{} × {}", p.name(), weights.weight(*p)))
            .collect();
        lines.push(format!("Overall = ({}) / {}", terms.join(" + "), weights.total()));
        lines.push("Pillar  = 100 × passed weight / total weight".to_string());
        lines.push("```\n".to_string());

        for pillar in &report.pillars {
            lines.push(format!("## {} Score: {}\n", pillar.name, pillar.score));
            if Self::scored_from_sources(pillar) {
                lines.push(format!(
                    "- Scored from external sources: {} points per positive source (max 100)",
                    self.config.thresholds.offsite_points_per_source
                ));
            }
            for check in &pillar.checks {
                let mark = if check.passed { "x" } else { " " };
                lines.push(format!(
                    "- [{}] {} (`{}`, weight {})",
                    mark, check.label, check.id, check.weight
                ));
            }
            lines.push(String::new());
        }

        if !report.suggestions.is_empty() {
            lines.push("## Suggestions\n".to_string());
            for s in report.suggestions.iter() {
                lines.push(format!("- {}", s));
            }
        }

        lines.join("\n")
    }

    /// The external branch is marked by its `externalReviews` check
    fn scored_from_sources(pillar: &PillarScore) -> bool {
        pillar.pillar == Pillar::OffSite && pillar.checks.iter().any(|c| c.id == "externalReviews")
    }
}

/// One suggestion per failed check, deduplicated in first-seen order
fn collect_suggestions(pillars: &[PillarScore]) -> SuggestionSet {
    let mut suggestions = SuggestionSet::new();
    for check in pillars.iter().flat_map(|p| p.failed_checks()) {
        match suggestion_for(&check.id) {
            Some(text) => {
                suggestions.insert(text);
            }
            None => {
                suggestions.insert(format!("Improve: {}", check.label));
            }
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sources, ImageAltCoverage};

    fn check(passed: bool, weight: u32) -> PillarCheck {
        PillarCheck::new("x", "x", passed, weight)
    }

    #[test]
    fn test_weighted_rule() {
        let checks = vec![check(true, 3), check(false, 2), check(true, 1)];
        assert_eq!(PillarRule::Weighted.score(&checks), 67);
        assert_eq!(PillarRule::Weighted.score(&[]), 0);
    }

    #[test]
    fn test_source_count_rule_caps_at_100() {
        let rule = PillarRule::SourceCount {
            positive_sources: 7,
            points_per_source: 20,
        };
        assert_eq!(rule.score(&[check(true, 2)]), 100);
        let rule = PillarRule::SourceCount {
            positive_sources: 0,
            points_per_source: 20,
        };
        assert_eq!(rule.score(&[check(true, 2)]), 0);
    }

    #[test]
    fn test_empty_signals() {
        let report = score(&ContentSignals::default(), None);

        assert_eq!(report.pillars.len(), 5);
        let order: Vec<Pillar> = report.pillars.iter().map(|p| p.pillar).collect();
        assert_eq!(order, Pillar::ALL.to_vec());

        // Only the vacuous alt and https checks pass
        assert_eq!(report.pillar(Pillar::ProductPage).map(|p| p.score), Some(15));
        assert_eq!(report.pillar(Pillar::Technical).map(|p| p.score), Some(11));
        assert_eq!(report.overall, 7);
        assert_eq!(report.grade(), "F");
    }

    #[test]
    fn test_every_failed_check_has_suggestion() {
        let report = score(&ContentSignals::default(), None);
        let failed: Vec<&PillarCheck> = report.failed_checks().collect();
        assert_eq!(failed.len(), report.suggestions.len());
        for c in failed {
            let text = suggestion_for(&c.id).expect("suggestion text");
            assert!(report.suggestions.contains(text), "{}", c.id);
        }
    }

    #[test]
    fn test_external_overrides_off_site_score() {
        let ext = ExternalSignalSummary::default()
            .with_count(sources::TRUSTPILOT, 3)
            .with_count(sources::GOOGLE, 1)
            .with_total_mentions(10);
        let report = score(&ContentSignals::default(), Some(&ext));
        let off_site = report.pillar(Pillar::OffSite).expect("off-site pillar");
        assert_eq!(off_site.score, 40);
        assert_eq!(off_site.checks.len(), 1);
        assert_eq!(off_site.checks[0].id, "externalReviews");
        assert!(off_site.checks[0].passed);
    }

    #[test]
    fn test_mentions_only_passes_check_but_scores_zero() {
        let ext = ExternalSignalSummary::default().with_total_mentions(5);
        let report = score(&ContentSignals::default(), Some(&ext));
        let off_site = report.pillar(Pillar::OffSite).expect("off-site pillar");
        assert!(off_site.checks[0].passed);
        assert_eq!(off_site.score, 0);
    }

    #[test]
    fn test_strong_page_scores_high() {
        let signals = ContentSignals {
            source_url: Some("https://shop.example.com/p/widget".into()),
            body_text: format!(
                "{} size material price benefits ideal for FAQ reviews buying guide compare 2025 pros cons warranty",
                "word ".repeat(600)
            ),
            product_schema_found: true,
            faq_schema_found: true,
            breadcrumb_schema_found: true,
            reviews_schema_found: true,
            image_alt_coverage: ImageAltCoverage::new(4, 4),
            internal_links: (0..12)
                .map(|i| crate::models::InternalLink {
                    text: format!("l{i}"),
                    href: format!("/l{i}"),
                })
                .collect(),
            has_viewport_meta: true,
            ..Default::default()
        };
        let report = score(&signals, None);
        assert_eq!(report.overall, 100);
        assert!(report.suggestions.is_empty());
        assert_eq!(report.grade(), "A");
    }

    #[test]
    fn test_custom_weights() {
        let mut config = ScoringConfig::default();
        config.pillar_weights.product = 0;
        config.pillar_weights.category = 0;
        config.pillar_weights.depth = 0;
        config.pillar_weights.offsite = 0;
        config.pillar_weights.technical = 1;
        let report = score_with_config(&ContentSignals::default(), None, &config);
        assert_eq!(report.overall, 11);
    }

    #[test]
    fn test_unsanitized_huge_weights_blend_without_overflow() {
        let mut config = ScoringConfig::default();
        config.pillar_weights.product = u32::MAX;
        config.pillar_weights.technical = u32::MAX;
        let signals = ContentSignals {
            source_url: Some("https://shop.example.com/p".into()),
            has_viewport_meta: true,
            ..Default::default()
        };
        let report = score_with_config(&signals, None, &config);
        let product = report.pillar(Pillar::ProductPage).map(|p| p.score).unwrap_or(0);
        let technical = report.pillar(Pillar::Technical).map(|p| p.score).unwrap_or(0);
        assert!(report.overall <= 100);
        assert!(report.overall >= product.min(technical));
        assert!(report.overall <= product.max(technical));
    }

    #[test]
    fn test_explain_mentions_every_pillar() {
        let config = ScoringConfig::default();
        let scorer = PillarScorer::new(&config);
        let ext = ExternalSignalSummary::default().with_count(sources::REDDIT, 2);
        let report = scorer.calculate(&ContentSignals::default(), Some(&ext));
        let text = scorer.explain(&report);
        for pillar in Pillar::ALL {
            assert!(text.contains(pillar.name()), "{}", pillar);
        }
        assert!(text.contains("20 points per positive source"));
        assert!(text.contains("`productSchema`"));
    }
}
