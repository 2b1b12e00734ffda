use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("website audit failed: {0}")]
    AuditFailed(String),

    #[error("report webhook failed: {0}")]
    WebhookFailed(String),

    #[error("invalid contact details: {0}")]
    InvalidContact(String),

    #[error("rate limited: try again in {retry_after_minutes} minute(s)")]
    RateLimited { retry_after_minutes: i64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssessError>;
