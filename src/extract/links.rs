//! Internal-link classification

use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

use super::element_text;
use crate::models::InternalLink;

/// Base used to resolve hrefs when the page origin is unknown
const NEUTRAL_BASE: &str = "http://localhost/";

static ANCHORS: OnceLock<Selector> = OnceLock::new();

/// Collect anchors that stay on the source host.
///
/// With a known host, an anchor is internal when its resolved host matches
/// and `href` is reported in resolved form. Without one, only root-relative
/// (`/...`) and fragment (`#...`) hrefs count and are reported verbatim.
pub fn internal_links(doc: &Html, source_url: Option<&str>) -> Vec<InternalLink> {
    let anchors = ANCHORS.get_or_init(|| Selector::parse("a[href]").expect("valid selector"));
    let base = source_url.and_then(|u| Url::parse(u.trim()).ok());
    let source_host = base.as_ref().and_then(|b| b.host_str().map(str::to_ascii_lowercase));

    doc.select(anchors)
        .filter_map(|a| {
            let raw = a.value().attr("href")?.trim();
            let href = classify(raw, base.as_ref(), source_host.as_deref())?;
            Some(InternalLink {
                text: element_text(&a),
                href,
            })
        })
        .collect()
}

fn classify(raw: &str, base: Option<&Url>, source_host: Option<&str>) -> Option<String> {
    match source_host {
        Some(host) => {
            let resolved = base?.join(raw).ok()?;
            let same_host = resolved
                .host_str()
                .is_some_and(|h| h.eq_ignore_ascii_case(host));
            same_host.then(|| resolved.to_string())
        }
        None => {
            // Still resolve so garbage hrefs are rejected the same way.
            let neutral = Url::parse(NEUTRAL_BASE).ok()?;
            neutral.join(raw).ok()?;
            (raw.starts_with('/') || raw.starts_with('#')).then(|| raw.to_string())
        }
    }
}
