use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    Medium,
    Good,
    Excellent,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Medium => write!(f, "medium"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

/// Derived scores for one snapshot of answers and audit data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub form_score: Score,
    pub website_score: Option<Score>,
    pub final_score: Score,
    pub tier: Tier,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            form_score: 0,
            website_score: None,
            final_score: 0,
            tier: Tier::Critical,
        }
    }
}
