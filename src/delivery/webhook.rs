use super::ReportPayload;
use crate::error::{AssessError, Result};
use crate::types::config::WebhookConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WebhookClientConfig {
    pub url: String,
    pub timeout: Duration,
}

impl WebhookClientConfig {
    /// `override_url` takes precedence over the configured url.
    pub fn resolve(config: &WebhookConfig, override_url: Option<&str>) -> Result<Self> {
        let url = override_url
            .or(config.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AssessError::ConfigParse(
                    "no report webhook configured (set webhook.url or pass --webhook-url)"
                        .to_string(),
                )
            })?;
        Ok(Self {
            url: url.to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

pub struct WebhookClient {
    config: WebhookClientConfig,
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new(config: WebhookClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssessError::WebhookFailed(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Posts the report once. Failures are returned to the caller, who may retry by hand.
    pub fn send(&self, payload: &ReportPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.config.url)
            .json(payload)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    AssessError::WebhookFailed(format!(
                        "webhook timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    AssessError::WebhookFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "report webhook rejected payload");
            return Err(AssessError::WebhookFailed(format!(
                "webhook returned status {status}"
            )));
        }
        tracing::info!(%status, final_score = payload.final_score, "report delivered");
        Ok(())
    }
}
