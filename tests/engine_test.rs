//! End-to-end tests for the extract → score pipeline
//!
//! These drive the public API with realistic markup and check the
//! behavioural guarantees callers rely on: bounded scores, vacuous checks,
//! fallback priority, suggestion coupling and determinism.

use readiness::scoring::suggestion_for;
use readiness::{analyze, extract, score, ExternalSignalSummary, Pillar, ScoreReport};

/// Scenario page: specs, benefits and reviews in text, padded past 500 words
fn widget_page() -> String {
    format!(
        "<html><head><title>Widget</title></head><body><h1>Buy Widget</h1>\
         <p>size material price stock sku model benefit use case review rating {}</p>\
         </body></html>",
        "words ".repeat(600)
    )
}

fn pillar_score(report: &ScoreReport, pillar: Pillar) -> u32 {
    report.pillar(pillar).map(|p| p.score).expect("pillar present")
}

fn check_passed(report: &ScoreReport, id: &str) -> bool {
    report.check(id).map(|c| c.passed).expect("check present")
}

#[test]
fn test_widget_page_scores_moderately() {
    let signals = extract(&widget_page(), None);
    assert_eq!(signals.title.as_deref(), Some("Widget"));
    assert_eq!(signals.h1, vec!["Buy Widget".to_string()]);
    assert!(signals.word_count() >= 500);

    let report = score(&signals, None);
    assert!(check_passed(&report, "specs"));
    assert!(check_passed(&report, "rich"));
    assert!(check_passed(&report, "reviews"));
    assert!(check_passed(&report, "alt"), "no images means alt passes");
    assert!(!check_passed(&report, "faqs"));

    assert_eq!(pillar_score(&report, Pillar::ProductPage), 85);
    assert_eq!(pillar_score(&report, Pillar::CategoryGuides), 0);
    assert_eq!(pillar_score(&report, Pillar::ContentDepth), 75);
    assert_eq!(pillar_score(&report, Pillar::Technical), 11);
    assert_eq!(pillar_score(&report, Pillar::OffSite), 0);
    assert_eq!(report.overall, 46);
}

#[test]
fn test_empty_markup_yields_low_score_and_many_suggestions() {
    let signals = extract("", None);
    assert!(signals.h1.is_empty());
    assert!(signals.body_text.is_empty());

    let report = score(&signals, None);
    assert!(report.overall <= 10, "overall={}", report.overall);
    // Everything except the vacuous alt and https checks fails
    let total_checks: usize = report.pillars.iter().map(|p| p.checks.len()).sum();
    assert_eq!(report.suggestions.len(), total_checks - 2);
}

#[test]
fn test_external_sources_drive_off_site_score() {
    let ext = ExternalSignalSummary::from_json_str(
        r#"{"counts": {"trustpilot": 3, "google": 1}, "totals": {"totalMentions": 10}}"#,
    )
    .expect("parse external");

    for body in ["", "<p>award winning, certified, warranty included</p>"] {
        let report = analyze(body, None, Some(&ext));
        assert_eq!(pillar_score(&report, Pillar::OffSite), 40);
        assert!(report.check("trustSignals").is_none());
    }
}

#[test]
fn test_scores_are_bounded() {
    let pages = [
        String::new(),
        "<<<>>> not html at all".to_string(),
        widget_page(),
        r#"<img><img alt="x"><table></table><a href="/a">a</a>"#.to_string(),
        r#"<script type="application/ld+json">{"@type":["Product","FAQPage","BreadcrumbList"],"review":[]}</script>"#
            .to_string(),
    ];
    for page in &pages {
        let signals = extract(page, Some("https://shop.example.com/"));
        assert!(signals.image_alt_coverage.with_alt <= signals.image_alt_coverage.total);
        let report = score(&signals, None);
        assert!(report.overall <= 100);
        for pillar in &report.pillars {
            assert!(pillar.score <= 100, "{} = {}", pillar.name, pillar.score);
        }
    }
}

#[test]
fn test_vacuous_alt_and_https() {
    let report = analyze("<p>No images here</p>", None, None);
    assert!(check_passed(&report, "alt"));
    assert!(check_passed(&report, "https"));

    let report = analyze("<p>No images here</p>", Some("http://shop.example.com/"), None);
    assert!(!check_passed(&report, "https"));
}

#[test]
fn test_aria_heading_beats_open_graph_title() {
    let signals = extract(
        r#"<html><head><meta property="og:title" content="From OG"></head>
           <body><span role="heading" aria-level="1">From ARIA</span></body></html>"#,
        None,
    );
    assert_eq!(signals.h1, vec!["From ARIA".to_string()]);
}

#[test]
fn test_every_failed_check_has_one_suggestion() {
    for page in ["", &widget_page() as &str, "<h1>x</h1><p>FAQ</p>"] {
        let report = analyze(page, None, None);
        let mut failed = 0;
        for check in report.failed_checks() {
            failed += 1;
            let text = suggestion_for(&check.id).expect("every check id has a suggestion");
            assert!(report.suggestions.contains(text), "missing suggestion for {}", check.id);
        }
        assert_eq!(report.suggestions.len(), failed);
    }
}

#[test]
fn test_repeat_scoring_is_identical() {
    let ext = ExternalSignalSummary::default().with_count("youtube", 2);
    let a = analyze(&widget_page(), Some("https://shop.example.com/w"), Some(&ext));
    let b = analyze(&widget_page(), Some("https://shop.example.com/w"), Some(&ext));
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("serialize"),
        serde_json::to_string(&b).expect("serialize")
    );
}

#[test]
fn test_duplicate_heading_order_is_first_occurrence() {
    let first = extract(
        "<h2>Sizing</h2><h2>Care</h2><h2>Sizing</h2><h3>Fit</h3><h3>Fit</h3><h3>Wash</h3>",
        None,
    );
    let second = extract(
        "<h2>Sizing</h2><h2>Sizing</h2><h2>Care</h2><h3>Fit</h3><h3>Wash</h3><h3>Fit</h3>",
        None,
    );
    assert_eq!(first.h2, vec!["Sizing".to_string(), "Care".to_string()]);
    assert_eq!(first.h2, second.h2);
    assert_eq!(first.h3, second.h3);
}

#[test]
fn test_rich_product_page() {
    let html = format!(
        r#"<!doctype html>
        <html><head>
          <title>Trail Runner 2</title>
          <meta name="description" content="Lightweight trail shoe">
          <meta name="viewport" content="width=device-width, initial-scale=1">
          <script type="application/ld+json">
            {{"@context":"https://schema.org","@graph":[
              {{"@type":"Product","name":"Trail Runner 2","brand":{{"@type":"Brand","name":"Acme"}},
                "aggregateRating":{{"ratingValue":"4.7","reviewCount":"210"}}}},
              {{"@type":"FAQPage","mainEntity":[]}},
              {{"@type":"BreadcrumbList","itemListElement":[]}}
            ]}}
          </script>
        </head><body>
          <h1>Trail Runner 2</h1>
          <img src="a.jpg" alt="Side view"><img src="b.jpg" alt="Sole">
          <p>Sizes, materials and price. Ideal for muddy trails. Buying guide: how to choose.
             Compare with the Road Runner. Summer 2025 edition. Pros and cons. Award-winning.</p>
          {links}
          <p>{padding}</p>
        </body></html>"#,
        links = (0..10)
            .map(|i| format!(r#"<a href="/c/{i}">Category {i}</a>"#))
            .collect::<String>(),
        padding = "trail ".repeat(520),
    );

    let signals = extract(&html, Some("https://shop.example.com/p/trail-runner-2"));
    assert_eq!(signals.brand_name.as_deref(), Some("Acme"));
    assert!(signals.product_schema_found && signals.faq_schema_found);
    assert!(signals.breadcrumb_schema_found && signals.reviews_schema_found);
    assert_eq!(signals.internal_links.len(), 10);
    assert!(signals.has_viewport_meta);

    let report = score(&signals, None);
    assert_eq!(report.overall, 100);
    assert!(report.suggestions.is_empty());
}
