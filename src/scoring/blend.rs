use super::form::compute_form_score;
use crate::types::answers::FormAnswers;
use crate::types::scoring::{Score, MAX_SCORE};
use serde::Serialize;

/// Trust split between the audit and the form, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlendWeights {
    pub website_pct: u32,
    pub form_pct: u32,
}

impl BlendWeights {
    pub const DEFAULT: Self = Self {
        website_pct: 70,
        form_pct: 30,
    };
    pub const FORM_TRUSTED: Self = Self {
        website_pct: 20,
        form_pct: 80,
    };
    pub const AUDIT_TRUSTED: Self = Self {
        website_pct: 80,
        form_pct: 20,
    };

    pub fn apply(self, website: Score, form: Score) -> Score {
        let total = u32::from(website) * self.website_pct + u32::from(form) * self.form_pct;
        let rounded = (total + 50) / 100;
        rounded.min(u32::from(MAX_SCORE)) as Score
    }
}

/// Accepts an audit score only when it is in 1..=100; zero means the audit produced nothing.
pub fn reliable_website_score(website_score: Option<i64>) -> Option<Score> {
    website_score
        .filter(|score| (1..=i64::from(MAX_SCORE)).contains(score))
        .map(|score| score as Score)
}

pub fn select_weights(website: Option<Score>, form_score: Score) -> BlendWeights {
    match (website, form_score) {
        (None, form) if form > 0 => BlendWeights::FORM_TRUSTED,
        (Some(_), 0) => BlendWeights::AUDIT_TRUSTED,
        _ => BlendWeights::DEFAULT,
    }
}

pub fn blend_scores(website_score: Option<i64>, form_score: Score) -> Score {
    let website = reliable_website_score(website_score);
    let weights = select_weights(website, form_score);
    tracing::debug!(
        ?website_score,
        form_score,
        website_pct = weights.website_pct,
        form_pct = weights.form_pct,
        "blending scores"
    );
    weights.apply(website.unwrap_or(0), form_score)
}

pub fn compute_final_score(website_score: Option<i64>, answers: &FormAnswers) -> Score {
    blend_scores(website_score, compute_form_score(answers))
}
