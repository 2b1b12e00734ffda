pub mod ledger;
pub mod webhook;

use crate::error::{AssessError, Result};
use crate::types::answers::FormAnswers;
use crate::types::scoring::{Score, ScoreState, Tier};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use ledger::SendLedger;
pub use webhook::{WebhookClient, WebhookClientConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    pub fn new(name: &str, email: &str, company: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AssessError::InvalidContact("name is required".to_string()));
        }
        let email = email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(AssessError::InvalidContact(format!(
                "not an email address: {email}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            email,
            company: company
                .map(str::trim)
                .filter(|company| !company.is_empty())
                .map(str::to_string),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Body posted to the report webhook.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPayload {
    pub contact: Contact,
    pub answers: FormAnswers,
    pub form_score: Score,
    pub website_score: Option<Score>,
    pub final_score: Score,
    pub tier: Tier,
    pub locale: String,
    pub timestamp: DateTime<Utc>,
}

impl ReportPayload {
    pub fn new(
        contact: Contact,
        answers: &FormAnswers,
        state: ScoreState,
        locale: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            contact,
            answers: answers.clone(),
            form_score: state.form_score,
            website_score: state.website_score,
            final_score: state.final_score,
            tier: state.tier,
            locale: locale.trim().to_string(),
            timestamp,
        }
    }
}
