//! Check tables for the five pillars
//!
//! Each function evaluates one pillar's fixed list of weighted checks. They
//! only read their inputs; the pillar score is derived elsewhere.

use super::vocab;
use crate::config::Thresholds;
use crate::models::{ContentSignals, ExternalSignalSummary, PillarCheck};

/// Shared by the `faqs` and `questions` checks
fn mentions_faq(signals: &ContentSignals) -> bool {
    vocab::FAQ.is_match(&signals.body_text) || signals.faq_schema_found
}

pub fn product_page(signals: &ContentSignals, t: &Thresholds) -> Vec<PillarCheck> {
    let body = signals.body_text.as_str();
    let alt_ok = signals
        .image_alt_coverage
        .ratio()
        .map_or(true, |r| r >= t.alt_coverage);

    vec![
        PillarCheck::new("specs", "Specifications present", vocab::SPECS.is_match(body), 3),
        PillarCheck::new("rich", "Benefits and use cases", vocab::BENEFITS.is_match(body), 3),
        PillarCheck::new("faqs", "FAQ content", mentions_faq(signals), 2),
        PillarCheck::new(
            "reviews",
            "Reviews or testimonials",
            signals.reviews_schema_found || signals.reviews_or_testimonials_mentioned,
            3,
        ),
        PillarCheck::new("alt", "Image alt text coverage", alt_ok, 2),
    ]
}

pub fn category_guides(signals: &ContentSignals, t: &Thresholds) -> Vec<PillarCheck> {
    let body = signals.body_text.as_str();
    vec![
        PillarCheck::new("guide", "Buying guide", vocab::BUYING_GUIDE.is_match(body), 2),
        PillarCheck::new(
            "comparison",
            "Comparison content",
            vocab::COMPARISON.is_match(body) || signals.table_count > 0,
            2,
        ),
        PillarCheck::new("seasonal", "Seasonal relevance", vocab::SEASONAL.is_match(body), 1),
        PillarCheck::new(
            "links",
            "Internal linking",
            signals.internal_links.len() >= t.min_internal_links,
            2,
        ),
    ]
}

pub fn content_depth(signals: &ContentSignals, t: &Thresholds) -> Vec<PillarCheck> {
    vec![
        PillarCheck::new("length", "Content length", signals.word_count() >= t.min_words, 3),
        PillarCheck::new("topics", "Topical coverage", vocab::TOPICS.is_match(&signals.body_text), 3),
        PillarCheck::new("questions", "Answers customer questions", mentions_faq(signals), 2),
    ]
}

pub fn technical(signals: &ContentSignals) -> Vec<PillarCheck> {
    let https = signals
        .source_url
        .as_deref()
        .map_or(true, |u| u.trim_start().to_ascii_lowercase().starts_with("https://"));

    vec![
        PillarCheck::new("productSchema", "Product schema", signals.product_schema_found, 3),
        PillarCheck::new("faqSchema", "FAQ schema", signals.faq_schema_found, 2),
        PillarCheck::new("breadcrumb", "Breadcrumb schema", signals.breadcrumb_schema_found, 1),
        PillarCheck::new("mobile", "Mobile viewport", signals.has_viewport_meta, 2),
        PillarCheck::new("https", "Served over HTTPS", https, 1),
    ]
}

/// Off-site checks: external evidence when supplied, text heuristics otherwise
pub fn off_site(signals: &ContentSignals, external: Option<&ExternalSignalSummary>) -> Vec<PillarCheck> {
    match external {
        Some(ext) => vec![PillarCheck::new(
            "externalReviews",
            "Third-party reviews and mentions",
            ext.has_evidence(),
            2,
        )],
        None => vec![PillarCheck::new(
            "trustSignals",
            "Trust signals on page",
            vocab::TRUST.is_match(&signals.body_text),
            2,
        )],
    }
}
