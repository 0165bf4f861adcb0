//! Compiled keyword vocabularies for text heuristics
//!
//! All patterns are case-insensitive and anchored on word boundaries so
//! "reviewer" does not count as "review".

use regex::Regex;
use std::sync::OnceLock;

/// A named, lazily compiled keyword pattern
pub struct Vocabulary {
    pattern: &'static str,
    compiled: OnceLock<Regex>,
}

impl Vocabulary {
    const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            compiled: OnceLock::new(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern).expect("valid regex"))
            .is_match(text)
    }
}

pub static SPECS: Vocabulary = Vocabulary::new(
    r"(?i)\b(sizes?|sizing|dimensions?|materials?|weight|price|pricing|in stock|stock|sku|model|specs?|specifications?|colou?rs?|capacity)\b",
);

pub static BENEFITS: Vocabulary = Vocabulary::new(
    r"(?i)\b(benefits?|use cases?|ideal for|perfect for|designed for|great for|how to use)\b",
);

pub static FAQ: Vocabulary = Vocabulary::new(r"(?i)\b(faqs?|frequently asked questions)\b");

pub static BUYING_GUIDE: Vocabulary = Vocabulary::new(
    r"(?i)\b(buying guide|buyer'?s guide|how to choose|what to look for)\b",
);

pub static COMPARISON: Vocabulary = Vocabulary::new(
    r"(?i)\b(compare|comparison|compared|versus|vs|differences? between)\b",
);

pub static SEASONAL: Vocabulary = Vocabulary::new(
    r"(?i)\b(spring|summer|autumn|winter|holiday|christmas|black friday|cyber monday|back to school|seasonal|20\d{2})\b",
);

pub static TOPICS: Vocabulary = Vocabulary::new(
    r"(?i)\b(features?|benefits?|pros|cons|alternatives?|guide|reviews?)\b",
);

pub static TRUST: Vocabulary = Vocabulary::new(
    r"(?i)\b(trustpilot|yelp|feefo|bazaarvoice|google reviews|as seen on|awards?|award-winning|certified|warranty)\b",
);
