//! Signal extraction
//!
//! Turns arbitrary (often malformed) HTML into a normalized
//! [`ContentSignals`] record. Parsing goes through html5ever via `scraper`,
//! which applies browser-style error recovery, so extraction never fails:
//! anything missing or broken degrades to an empty or absent field.
//!
//! # Pipeline
//!
//! 1. Parse the document
//! 2. `<title>` (falls back to `og:title`)
//! 3. Meta description (falls back to `og:description`)
//! 4. Raw `h1`/`h2`/`h3` text
//! 5. Visible body text, whitespace-collapsed
//! 6. Internal links
//! 7. JSON-LD walk (schema flags, brand, title candidates)
//! 8. `<h1>` fallback chain when no real `<h1>` exists
//! 9. Heading normalization, clipping and deduplication
//! 10. Image alt coverage
//! 11. Review/testimonial vocabulary match

pub mod headings;
pub mod links;
pub mod structured;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

use crate::models::{ContentSignals, ImageAltCoverage};
use headings::{collect_text, dedupe_and_clip, resolve_h1_fallback, FallbackSources};
use structured::StructuredData;

/// Elements whose text is never visible
const INVISIBLE: &[&str] = &["script", "style", "noscript", "template"];

struct Selectors {
    title: Selector,
    meta: Selector,
    h1: Selector,
    h2: Selector,
    h3: Selector,
    body: Selector,
    scripts: Selector,
    images: Selector,
    tables: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let parse = |css: &str| Selector::parse(css).expect("valid selector");
        Selectors {
            title: parse("title"),
            meta: parse("meta"),
            h1: parse("h1"),
            h2: parse("h2"),
            h3: parse("h3"),
            body: parse("body"),
            scripts: parse("script"),
            images: parse("img"),
            tables: parse("table"),
        }
    })
}

fn review_vocabulary() -> &'static Regex {
    static REVIEWS: OnceLock<Regex> = OnceLock::new();
    REVIEWS.get_or_init(|| {
        Regex::new(r"(?i)\b(reviews?|ratings?|testimonials?|stars)\b").expect("valid regex")
    })
}

/// Extract content signals from raw markup.
///
/// `source_url` is only used to classify links and for protocol checks.
pub fn extract(markup: &str, source_url: Option<&str>) -> ContentSignals {
    let doc = Html::parse_document(markup);
    let sel = selectors();

    let og_title = meta_content(&doc, "og:title");
    let title = doc
        .select(&sel.title)
        .map(|el| element_text(&el))
        .find(|t| !t.is_empty())
        .or_else(|| og_title.clone());
    let meta_description =
        meta_content(&doc, "description").or_else(|| meta_content(&doc, "og:description"));

    let raw_h1 = collect_text(&doc, &sel.h1);
    let raw_h2 = collect_text(&doc, &sel.h2);
    let raw_h3 = collect_text(&doc, &sel.h3);

    let body_text = doc
        .select(&sel.body)
        .next()
        .map(|body| visible_text(&body))
        .unwrap_or_default();

    let internal_links = links::internal_links(&doc, source_url);

    let structured = structured_data(&doc, sel);

    let raw_h1 = if raw_h1.is_empty() {
        let sources = FallbackSources {
            doc: &doc,
            og_title: og_title.as_deref(),
            json_ld_title: structured.best_title(),
        };
        match resolve_h1_fallback(&sources) {
            Some((strategy, found)) => {
                debug!("No <h1>; using {} fallback ({} candidates)", strategy, found.len());
                found
            }
            None => Vec::new(),
        }
    } else {
        raw_h1
    };

    let h1 = dedupe_and_clip(raw_h1);
    let h2 = dedupe_and_clip(raw_h2);
    let h3 = dedupe_and_clip(raw_h3);

    let image_alt_coverage = alt_coverage(&doc, sel);
    let reviews_or_testimonials_mentioned = review_vocabulary().is_match(&body_text);

    let has_viewport_meta = doc.select(&sel.meta).any(|m| {
        m.value()
            .attr("name")
            .is_some_and(|n| n.trim().eq_ignore_ascii_case("viewport"))
    });
    let table_count = doc.select(&sel.tables).count();

    debug!(
        "Extracted: h1={}, h2={}, h3={}, words={}, links={}, images={}/{}",
        h1.len(),
        h2.len(),
        h3.len(),
        body_text.split_whitespace().count(),
        internal_links.len(),
        image_alt_coverage.with_alt,
        image_alt_coverage.total
    );

    ContentSignals {
        source_url: source_url.map(str::to_string),
        title,
        meta_description,
        h1,
        h2,
        h3,
        body_text,
        brand_name: structured.brand_name.clone(),
        product_schema_found: structured.product,
        faq_schema_found: structured.faq,
        breadcrumb_schema_found: structured.breadcrumb,
        reviews_schema_found: structured.reviews,
        image_alt_coverage,
        internal_links,
        reviews_or_testimonials_mentioned,
        has_viewport_meta,
        table_count,
    }
}

/// Collapse every whitespace run to a single space and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All descendant text of an element, whitespace-normalized
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Text nodes under `root`, skipping script/style content
fn visible_text(root: &ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| INVISIBLE.contains(&e.name()))
        });
        if !hidden {
            parts.push(&**text);
        }
    }
    normalize_whitespace(&parts.concat())
}

/// `content` of the first `<meta>` whose `name` or `property` matches `key`
fn meta_content(doc: &Html, key: &str) -> Option<String> {
    doc.select(&selectors().meta).find_map(|m| {
        let el = m.value();
        let matches = [el.attr("name"), el.attr("property")]
            .into_iter()
            .flatten()
            .any(|k| k.trim().eq_ignore_ascii_case(key));
        if !matches {
            return None;
        }
        let content = normalize_whitespace(el.attr("content")?);
        (!content.is_empty()).then_some(content)
    })
}

fn structured_data(doc: &Html, sel: &Selectors) -> StructuredData {
    let mut data = StructuredData::default();
    let (mut parsed, mut skipped) = (0usize, 0usize);

    for script in doc.select(&sel.scripts) {
        let is_json_ld = script
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().to_ascii_lowercase().starts_with("application/ld+json"));
        if !is_json_ld {
            continue;
        }
        let payload: String = script.text().collect();
        if data.absorb_block(&payload) {
            parsed += 1;
        } else {
            skipped += 1;
        }
    }

    if parsed + skipped > 0 {
        debug!("JSON-LD blocks: {} parsed, {} skipped as malformed", parsed, skipped);
    }
    data
}

fn alt_coverage(doc: &Html, sel: &Selectors) -> ImageAltCoverage {
    let (with_alt, total) = doc.select(&sel.images).fold((0, 0), |(with, total), img| {
        let has_alt = img
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty());
        (with + usize::from(has_alt), total + 1)
    });
    ImageAltCoverage::new(with_alt, total)
}
