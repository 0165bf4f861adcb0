//! Heading collection and the `<h1>` fallback chain
//!
//! When a page has no usable `<h1>`, candidate producers are tried in a fixed
//! priority order and the first one that yields anything wins. Each producer
//! is independent, so the order lives in one table ([`H1_FALLBACKS`]).

use indexmap::IndexSet;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

use super::{element_text, normalize_whitespace};

/// Maximum characters kept per heading
pub const MAX_HEADING_CHARS: usize = 300;

/// Inputs shared by every fallback producer
pub struct FallbackSources<'a> {
    pub doc: &'a Html,
    pub og_title: Option<&'a str>,
    pub json_ld_title: Option<&'a str>,
}

type Producer = fn(&FallbackSources<'_>) -> Vec<String>;

/// Priority-ordered fallback producers for a missing `<h1>`
pub const H1_FALLBACKS: &[(&str, Producer)] = &[
    ("aria-heading", aria_level_one),
    ("product-title", product_title_markers),
    ("og-title", og_title),
    ("json-ld", json_ld_title),
];

/// Run the fallback chain, returning the name of the producer that fired
pub fn resolve_h1_fallback(sources: &FallbackSources<'_>) -> Option<(&'static str, Vec<String>)> {
    H1_FALLBACKS.iter().find_map(|(name, produce)| {
        let found = produce(sources);
        (!found.is_empty()).then_some((*name, found))
    })
}

/// Raw trimmed, non-empty text of every element matching `selector`
pub fn collect_text(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Normalize, clip, then drop repeats keeping first-seen order.
///
/// Clipping happens before deduplication so two long headings that only
/// differ past the clip point collapse into one entry.
pub fn dedupe_and_clip(headings: Vec<String>) -> Vec<String> {
    let unique: IndexSet<String> = headings
        .iter()
        .map(|h| clip(&normalize_whitespace(h)))
        .filter(|h| !h.is_empty())
        .collect();
    unique.into_iter().collect()
}

fn clip(text: &str) -> String {
    match text.char_indices().nth(MAX_HEADING_CHARS) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

fn selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("valid selector"))
}

fn aria_level_one(sources: &FallbackSources<'_>) -> Vec<String> {
    static ROLE_HEADING: OnceLock<Selector> = OnceLock::new();
    sources
        .doc
        .select(selector(&ROLE_HEADING, r#"[role="heading"]"#))
        .filter(|el| {
            el.value()
                .attr("aria-level")
                .is_some_and(|lvl| lvl.trim() == "1")
        })
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
        .collect()
}

fn product_title_markers(sources: &FallbackSources<'_>) -> Vec<String> {
    static MARKERS: OnceLock<Selector> = OnceLock::new();
    static H1_TITLE_ATTR: OnceLock<Selector> = OnceLock::new();

    let markers = selector(
        &MARKERS,
        r#"[itemprop="name"], .product-title, .product__title, .product-name, .product_title, [data-product-title], [data-testid="product-title"]"#,
    );
    let mut found: Vec<String> = sources
        .doc
        .select(markers)
        .map(|el| marker_text(&el))
        .filter(|t| !t.is_empty())
        .collect();

    found.extend(
        sources
            .doc
            .select(selector(&H1_TITLE_ATTR, "h1[title]"))
            .filter_map(|el| el.value().attr("title"))
            .map(normalize_whitespace)
            .filter(|t| !t.is_empty()),
    );
    found
}

/// Element text, or its `content`/`data-product-title` attribute for
/// microdata `<meta itemprop="name">` style markers
fn marker_text(el: &ElementRef<'_>) -> String {
    let text = element_text(el);
    if !text.is_empty() {
        return text;
    }
    let value = el.value();
    value
        .attr("content")
        .or_else(|| value.attr("data-product-title"))
        .map(normalize_whitespace)
        .unwrap_or_default()
}

fn og_title(sources: &FallbackSources<'_>) -> Vec<String> {
    sources
        .og_title
        .map(normalize_whitespace)
        .filter(|t| !t.is_empty())
        .into_iter()
        .collect()
}

fn json_ld_title(sources: &FallbackSources<'_>) -> Vec<String> {
    sources
        .json_ld_title
        .map(normalize_whitespace)
        .filter(|t| !t.is_empty())
        .into_iter()
        .collect()
}
