//! JSON-LD structured-data walker
//!
//! Visits every object in a parsed JSON-LD payload (top-level, arrays,
//! `@graph`, arbitrarily nested properties) and records which schema types
//! are present. Ill-typed payloads are walked like any other value: a
//! `@type` that is neither a string nor an array of strings is ignored.

use serde_json::{Map, Value};

use super::normalize_whitespace;

/// Keys whose string values may stand in for a missing `<h1>`
const TITLE_KEYS: &[&str] = &["name", "headline", "title"];

/// What the walker learned from all structured-data blocks on a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredData {
    pub product: bool,
    pub faq: bool,
    pub breadcrumb: bool,
    pub reviews: bool,
    pub brand_name: Option<String>,
    /// (rank, text) in discovery order; lower rank is a better title
    candidates: Vec<(u8, String)>,
}

impl StructuredData {
    /// Parse one JSON-LD block and fold it in.
    ///
    /// Returns `false` (and leaves `self` untouched) when the payload is not
    /// valid JSON.
    pub fn absorb_block(&mut self, payload: &str) -> bool {
        match serde_json::from_str::<Value>(payload.trim()) {
            Ok(value) => {
                self.visit(&value);
                true
            }
            Err(_) => false,
        }
    }

    /// Best title candidate, preferring product names, then headlines
    pub fn best_title(&self) -> Option<&str> {
        self.candidates
            .iter()
            .enumerate()
            .min_by_key(|(idx, (rank, _))| (*rank, *idx))
            .map(|(_, (_, text))| text.as_str())
    }

    fn visit(&mut self, value: &Value) {
        match value {
            Value::Array(items) => items.iter().for_each(|v| self.visit(v)),
            Value::Object(obj) => self.visit_object(obj),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    fn visit_object(&mut self, obj: &Map<String, Value>) {
        let types = type_tags(obj);
        let is_product = types.iter().any(|t| t == "Product");

        for tag in &types {
            match tag.as_str() {
                "Product" => self.product = true,
                "FAQPage" => self.faq = true,
                "BreadcrumbList" => self.breadcrumb = true,
                "Review" | "AggregateRating" => self.reviews = true,
                _ => {}
            }
        }
        if obj.contains_key("aggregateRating") || obj.contains_key("review") {
            self.reviews = true;
        }

        if self.brand_name.is_none() {
            self.brand_name = obj.get("brand").and_then(brand_name);
        }

        for key in TITLE_KEYS {
            if let Some(Value::String(text)) = obj.get(*key) {
                let text = normalize_whitespace(text);
                if text.is_empty() {
                    continue;
                }
                let rank = match *key {
                    "name" if is_product => 0,
                    "headline" => 1,
                    "title" => 2,
                    _ => 3,
                };
                self.candidates.push((rank, text));
            }
        }

        for child in obj.values() {
            self.visit(child);
        }
    }
}

/// `@type` as a list of tags, accepting a scalar or an array
fn type_tags(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("@type") {
        Some(Value::String(s)) => vec![strip_vocab(s).to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| strip_vocab(s).to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// `https://schema.org/Product` and `schema:Product` both mean `Product`
fn strip_vocab(tag: &str) -> &str {
    let tag = tag.trim();
    tag.rsplit(['/', ':']).next().unwrap_or(tag)
}

fn brand_name(brand: &Value) -> Option<String> {
    let raw = match brand {
        Value::Object(b) => b.get("name").and_then(Value::as_str)?,
        Value::String(s) => s.as_str(),
        Value::Array(items) => return items.iter().find_map(brand_name),
        _ => return None,
    };
    let name = normalize_whitespace(raw);
    (!name.is_empty()).then_some(name)
}
