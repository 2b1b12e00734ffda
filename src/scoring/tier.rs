use super::weights;
use crate::types::answers::{Answer, Category, FormAnswers};
use crate::types::scoring::{Score, Tier};

pub const MEDIUM_THRESHOLD: Score = 30;
pub const GOOD_THRESHOLD: Score = 70;
pub const EXCELLENT_THRESHOLD: Score = 90;

pub fn classify(score: Score) -> Tier {
    match score {
        s if s < MEDIUM_THRESHOLD => Tier::Critical,
        s if s < GOOD_THRESHOLD => Tier::Medium,
        s if s < EXCELLENT_THRESHOLD => Tier::Good,
        _ => Tier::Excellent,
    }
}

pub fn headline(tier: Tier) -> &'static str {
    match tier {
        Tier::Critical => "Your business is barely visible online",
        Tier::Medium => "Your visibility has clear room to grow",
        Tier::Good => "Your business is well positioned online",
        Tier::Excellent => "Your online visibility is excellent",
    }
}

pub fn summary(tier: Tier) -> &'static str {
    match tier {
        Tier::Critical => {
            "Most potential customers will not find you. Start with the basics below before spending on ads."
        }
        Tier::Medium => {
            "You are found by some customers, but competitors likely capture the rest. Focus on the gaps below."
        }
        Tier::Good => "The foundations are in place. Targeted improvements will compound what already works.",
        Tier::Excellent => "Keep measuring and refining; the recommendations below help you stay ahead.",
    }
}

const SOCIAL_RECOMMENDATIONS: &[&str] = &[
    "Publish on a fixed weekly schedule on the two platforms your customers use most",
    "Turn your best-performing organic posts into small paid campaigns",
    "Answer comments and direct messages within one business day",
    "Link every profile to a landing page that captures enquiries",
];

const SEO_RECOMMENDATIONS: &[&str] = &[
    "Claim and complete your business profile on the major search engines",
    "Fix page speed and mobile usability issues flagged by the website audit",
    "Write one page per core service targeting the terms customers search for",
    "Collect reviews regularly to strengthen local search rankings",
];

const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Define which channel brings your best customers and concentrate budget there",
    "Make sure your website clearly states what you offer and how to contact you",
    "Ask satisfied customers for reviews and showcase them",
    "Measure enquiries per channel every month and drop what does not perform",
];

/// Static dispatch on the visibility channel; anything unrecognized gets the holistic set.
pub fn select_recommendations(primary_channel: Option<&str>) -> &'static [&'static str] {
    match primary_channel.map(str::trim) {
        Some("social_media") => SOCIAL_RECOMMENDATIONS,
        Some("search_engines") => SEO_RECOMMENDATIONS,
        _ => GENERIC_RECOMMENDATIONS,
    }
}

/// The visibility channel recommendations are keyed on. For multi-select answers this is the
/// highest-weighted selection, ties broken alphabetically.
pub fn primary_channel(answers: &FormAnswers) -> Option<&str> {
    match answers.get(Category::Visibility)? {
        Answer::Single(value) => Some(value.trim()),
        Answer::Multiple(values) => values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .rev()
            .max_by_key(|value| weights::weight(Category::Visibility, value)),
    }
}
