use super::AuditResult;
use crate::error::{AssessError, Result};
use crate::types::config::AuditConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AuditClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl From<&AuditConfig> for AuditClientConfig {
    fn from(config: &AuditConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Fire-and-await client for the website analysis service. No retries; the
/// caller decides whether to fall back to form-only scoring.
pub struct AuditClient {
    config: AuditClientConfig,
    client: reqwest::blocking::Client,
}

impl AuditClient {
    pub fn new(config: AuditClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssessError::AuditFailed(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn fetch(&self, target_url: &str) -> Result<AuditResult> {
        let target_url = normalize_target(target_url)?;
        tracing::info!(target = %target_url, endpoint = %self.config.endpoint, "requesting website audit");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("url", target_url.as_str())])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    AssessError::AuditFailed(format!(
                        "audit timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    AssessError::AuditFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(AssessError::AuditFailed(format!(
                "audit service returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| AssessError::AuditFailed(e.to_string()))?;
        AuditResult::from_json(&body).map_err(|e| AssessError::AuditFailed(e.to_string()))
    }
}

/// Prefixes bare domains with https and rejects anything that is not a web address.
pub fn normalize_target(target_url: &str) -> Result<String> {
    let trimmed = target_url.trim();
    if trimmed.is_empty() {
        return Err(AssessError::AuditFailed("website url is empty".to_string()));
    }
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let host = with_scheme
        .split("://")
        .nth(1)
        .and_then(|rest| rest.split(['/', '?', '#']).next())
        .unwrap_or_default();
    if !host.contains('.') || host.contains(char::is_whitespace) {
        return Err(AssessError::AuditFailed(format!(
            "not a website url: {trimmed}"
        )));
    }
    Ok(with_scheme)
}
