use crate::error::AssessError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_AUDIT_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    pub audit: AuditConfig,
    pub webhook: WebhookConfig,
    pub rate_limit: RateLimitConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://audit.visiscore.app/api/check".to_string(),
            timeout_secs: DEFAULT_AUDIT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_sends: u32,
    pub window_minutes: u32,
    pub ledger_file: PathBuf,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_sends: 3,
            window_minutes: 60,
            ledger_file: PathBuf::from(".visiscore/send_ledger.json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub locale: String,
    pub format: ReportFormatSetting,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            format: ReportFormatSetting::Md,
        }
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    (value.starts_with("https://") || value.starts_with("http://"))
        && value.split("://").nth(1).is_some_and(|rest| !rest.is_empty())
}

impl AssessConfig {
    pub fn validate(&self) -> Result<(), AssessError> {
        if !is_http_url(&self.audit.endpoint) {
            return Err(AssessError::ConfigParse(format!(
                "audit.endpoint must be an http(s) url: {}",
                self.audit.endpoint
            )));
        }
        if self.audit.timeout_secs == 0 {
            return Err(AssessError::ConfigParse(
                "audit.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if let Some(url) = &self.webhook.url {
            if !is_http_url(url) {
                return Err(AssessError::ConfigParse(format!(
                    "webhook.url must be an http(s) url: {url}"
                )));
            }
        }
        if self.webhook.timeout_secs == 0 {
            return Err(AssessError::ConfigParse(
                "webhook.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.max_sends == 0 {
            return Err(AssessError::ConfigParse(
                "rate_limit.max_sends must be greater than 0".to_string(),
            ));
        }
        if self.rate_limit.window_minutes == 0 {
            return Err(AssessError::ConfigParse(
                "rate_limit.window_minutes must be greater than 0".to_string(),
            ));
        }
        if self.rate_limit.ledger_file.as_os_str().is_empty() {
            return Err(AssessError::ConfigParse(
                "rate_limit.ledger_file cannot be empty".to_string(),
            ));
        }

        if self.report.locale.trim().is_empty() {
            return Err(AssessError::ConfigParse(
                "report.locale cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
