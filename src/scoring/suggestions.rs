//! Remediation text for failed checks

/// One fixed remediation per check id
const SUGGESTIONS: &[(&str, &str)] = &[
    // Product Page Quality
    ("specs", "Add a specifications section covering size, material, price and stock availability."),
    ("rich", "Describe benefits and use cases so shoppers can see who the product is for."),
    ("faqs", "Add an FAQ section answering common pre-purchase questions."),
    ("reviews", "Show customer reviews or testimonials, ideally marked up with Review schema."),
    ("alt", "Write descriptive alt text for at least 70% of product images."),
    // Category & Guides
    ("guide", "Publish a buying guide explaining how to choose between options."),
    ("comparison", "Add a comparison table or side-by-side comparison of similar products."),
    ("seasonal", "Mention seasonal or current-year context to keep the page fresh."),
    ("links", "Link to at least 10 related internal pages (categories, guides, related products)."),
    // Content Depth & Authority
    ("length", "Expand the page to at least 500 words of useful content."),
    ("topics", "Cover features, pros and cons, and alternatives to show topical depth."),
    ("questions", "Answer likely customer questions directly on the page."),
    // Technical & Schema
    ("productSchema", "Add Product structured data (JSON-LD) with name, brand, price and availability."),
    ("faqSchema", "Mark up questions and answers with FAQPage structured data."),
    ("breadcrumb", "Add BreadcrumbList structured data reflecting the site hierarchy."),
    ("mobile", "Add a responsive viewport meta tag for mobile rendering."),
    ("https", "Serve the page over HTTPS."),
    // Off-Site & Trust Signals
    ("externalReviews", "Build third-party reviews and mentions on independent platforms."),
    ("trustSignals", "Surface trust signals such as review-site ratings, awards, certifications or warranty terms."),
];

/// Remediation text for a check id
pub fn suggestion_for(check_id: &str) -> Option<&'static str> {
    SUGGESTIONS
        .iter()
        .find(|(id, _)| *id == check_id)
        .map(|(_, text)| *text)
}
