use crate::types::answers::Category;

pub const MAX_WEIGHT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionWeight {
    pub value: &'static str,
    pub label: &'static str,
    pub weight: u8,
}

const fn option(value: &'static str, label: &'static str, weight: u8) -> OptionWeight {
    OptionWeight {
        value,
        label,
        weight,
    }
}

const VISIBILITY: &[OptionWeight] = &[
    option("search_engines", "Search engines", 8),
    option("website", "Own website", 6),
    option("social_media", "Social media", 5),
    option("marketplaces", "Online marketplaces", 5),
    option("word_of_mouth", "Word of mouth", 3),
    option("print", "Print media", 2),
    option("none", "Not visible yet", 0),
];

const ADVERTISING_FREQUENCY: &[OptionWeight] = &[
    option("continuous", "Always-on campaigns", 10),
    option("weekly", "Weekly", 9),
    option("monthly", "Monthly", 7),
    option("occasionally", "Occasionally", 4),
    option("never", "Never", 0),
];

const GOALS: &[OptionWeight] = &[
    option("more_online", "More online visibility", 10),
    option("more_customers", "More customers", 8),
    option("more_sales", "More sales", 8),
    option("brand_awareness", "Brand awareness", 7),
    option("local_presence", "Local presence", 6),
    option("unsure", "Not sure yet", 2),
];

const CAMPAIGN_MANAGEMENT: &[OptionWeight] = &[
    option("agency", "An agency", 9),
    option("in_house_team", "An in-house team", 7),
    option("self_managed", "I manage it myself", 4),
    option("nobody", "Nobody", 0),
];

const REVIEW_SENTIMENT: &[OptionWeight] = &[
    option("very_positive", "Very positive", 10),
    option("mostly_positive", "Mostly positive", 7),
    option("mixed", "Mixed", 4),
    option("mostly_negative", "Mostly negative", 1),
    option("no_reviews", "No reviews yet", 0),
];

const PRIOR_CAMPAIGNS: &[OptionWeight] = &[
    option("successful", "Yes, successful", 10),
    option("mixed_results", "Yes, mixed results", 6),
    option("unsuccessful", "Yes, unsuccessful", 3),
    option("never", "Never ran one", 0),
];

const BUSINESS_PHASE: &[OptionWeight] = &[
    option("established", "Established", 9),
    option("growing", "Growing", 8),
    option("startup", "Startup", 5),
    option("pre_launch", "Pre-launch", 2),
];

const IMPLEMENTATION_TIMEFRAME: &[OptionWeight] = &[
    option("immediately", "Immediately", 10),
    option("within_month", "Within a month", 8),
    option("within_quarter", "Within three months", 5),
    option("undecided", "Undecided", 2),
];

pub fn options(category: Category) -> &'static [OptionWeight] {
    match category {
        Category::Visibility => VISIBILITY,
        Category::AdvertisingFrequency => ADVERTISING_FREQUENCY,
        Category::Goals => GOALS,
        Category::CampaignManagement => CAMPAIGN_MANAGEMENT,
        Category::ReviewSentiment => REVIEW_SENTIMENT,
        Category::PriorCampaigns => PRIOR_CAMPAIGNS,
        Category::BusinessPhase => BUSINESS_PHASE,
        Category::ImplementationTimeframe => IMPLEMENTATION_TIMEFRAME,
    }
}

/// Weight for an answer value; values outside the table weigh 0.
pub fn weight(category: Category, value: &str) -> u8 {
    let value = value.trim();
    match options(category).iter().find(|option| option.value == value) {
        Some(option) => option.weight.min(MAX_WEIGHT),
        None => {
            tracing::debug!(category = %category, value, "unknown option value, weight 0");
            0
        }
    }
}

/// Same as [`weight`] for callers holding a raw category key.
pub fn weight_for(category: &str, value: &str) -> u8 {
    match category.parse::<Category>() {
        Ok(category) => weight(category, value),
        Err(_) => {
            tracing::debug!(category, value, "unknown category, weight 0");
            0
        }
    }
}
