//! Core data models for the readiness engine
//!
//! These records flow linearly through the engine: the extractor builds a
//! [`ContentSignals`], the scorer turns it (plus an optional
//! [`ExternalSignalSummary`]) into a [`ScoreReport`]. All of them are plain
//! values; nothing is mutated after the function that built it returns.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Image alt-text coverage as raw counts.
///
/// The ratio is derived on demand so an image-less page never stores a
/// meaningless `0/0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAltCoverage {
    pub with_alt: usize,
    pub total: usize,
}

impl ImageAltCoverage {
    /// Build coverage counts, clamping `with_alt` to `total`
    pub fn new(with_alt: usize, total: usize) -> Self {
        Self {
            with_alt: with_alt.min(total),
            total,
        }
    }

    /// Fraction of images carrying alt text, `None` when there are no images
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.with_alt as f64 / self.total as f64)
        }
    }
}

/// An anchor pointing back into the same site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    pub text: String,
    pub href: String,
}

/// Normalized facts extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSignals {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Deduplicated, order-preserving, clipped heading texts
    #[serde(default, rename = "headings1")]
    pub h1: Vec<String>,
    #[serde(default, rename = "headings2")]
    pub h2: Vec<String>,
    #[serde(default, rename = "headings3")]
    pub h3: Vec<String>,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub product_schema_found: bool,
    #[serde(default)]
    pub faq_schema_found: bool,
    #[serde(default)]
    pub breadcrumb_schema_found: bool,
    #[serde(default)]
    pub reviews_schema_found: bool,
    #[serde(default)]
    pub image_alt_coverage: ImageAltCoverage,
    #[serde(default)]
    pub internal_links: Vec<InternalLink>,
    #[serde(default)]
    pub reviews_or_testimonials_mentioned: bool,
    /// A `<meta name="viewport">` tag was present in the markup
    #[serde(default)]
    pub has_viewport_meta: bool,
    /// Number of `<table>` elements in the markup
    #[serde(default)]
    pub table_count: usize,
}

impl ContentSignals {
    /// Whitespace-split word count of the body text
    pub fn word_count(&self) -> usize {
        self.body_text.split_whitespace().count()
    }
}

/// One of the five fixed evaluation categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pillar {
    ProductPage,
    CategoryGuides,
    ContentDepth,
    Technical,
    OffSite,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::ProductPage,
        Pillar::CategoryGuides,
        Pillar::ContentDepth,
        Pillar::Technical,
        Pillar::OffSite,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Pillar::ProductPage => "Product Page Quality",
            Pillar::CategoryGuides => "Category & Guides",
            Pillar::ContentDepth => "Content Depth & Authority",
            Pillar::Technical => "Technical & Schema",
            Pillar::OffSite => "Off-Site & Trust Signals",
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single named, weighted boolean test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarCheck {
    pub id: String,
    pub label: String,
    pub passed: bool,
    pub weight: u32,
}

impl PillarCheck {
    pub fn new(id: &str, label: &str, passed: bool, weight: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            passed,
            weight: weight.max(1),
        }
    }
}

/// Score of one pillar with the checks that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub name: String,
    /// 0..=100
    pub score: u32,
    pub checks: Vec<PillarCheck>,
}

impl PillarScore {
    pub fn failed_checks(&self) -> impl Iterator<Item = &PillarCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Remediation texts, deduplicated in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionSet(IndexSet<String>);

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a suggestion, returning `false` if it was already present
    pub fn insert(&mut self, suggestion: impl Into<String>) -> bool {
        self.0.insert(suggestion.into())
    }

    pub fn contains(&self, suggestion: &str) -> bool {
        self.0.contains(suggestion)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Full result of one scoring pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0..=100, always a blend of `pillars`
    pub overall: u32,
    pub pillars: Vec<PillarScore>,
    pub suggestions: SuggestionSet,
}

impl ScoreReport {
    /// Letter grade derived from the overall score
    pub fn grade(&self) -> &'static str {
        grade_from_score(self.overall)
    }

    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.pillars.iter().find(|p| p.pillar == pillar)
    }

    /// Look up a check by id across all pillars
    pub fn check(&self, id: &str) -> Option<&PillarCheck> {
        self.pillars
            .iter()
            .flat_map(|p| p.checks.iter())
            .find(|c| c.id == id)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &PillarCheck> {
        self.pillars.iter().flat_map(|p| p.failed_checks())
    }
}

/// Calculate a letter grade from a 0-100 score
pub fn grade_from_score(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "A",
        s if s >= 80 => "B",
        s if s >= 70 => "C",
        s if s >= 60 => "D",
        _ => "F",
    }
}

/// Well-known external source names
pub mod sources {
    pub const TRUSTPILOT: &str = "trustpilot";
    pub const GOOGLE: &str = "google";
    pub const REDDIT: &str = "reddit";
    pub const YOUTUBE: &str = "youtube";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTotals {
    #[serde(default)]
    pub total_mentions: i64,
}

/// Caller-supplied off-site evidence
///
/// Keys are source names (see [`sources`]); a missing key counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSignalSummary {
    #[serde(default)]
    pub counts: BTreeMap<String, i64>,
    #[serde(default)]
    pub totals: ExternalTotals,
}

impl ExternalSignalSummary {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_count(mut self, source: impl Into<String>, count: i64) -> Self {
        self.counts.insert(source.into(), count);
        self
    }

    pub fn with_total_mentions(mut self, total: i64) -> Self {
        self.totals.total_mentions = total;
        self
    }

    pub fn count(&self, source: &str) -> i64 {
        self.counts.get(source).copied().unwrap_or(0)
    }

    /// Number of named sources with a positive count
    pub fn positive_sources(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    /// Any evidence at all, per-source or aggregate
    pub fn has_evidence(&self) -> bool {
        self.positive_sources() > 0 || self.totals.total_mentions > 0
    }
}
