//! Website audit results and the client that fetches them.
//!
//! The scoring core only consumes the top-level score. Everything else in the
//! payload is carried through for display.

pub mod client;

use crate::error::{AssessError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub use client::{AuditClient, AuditClientConfig};

/// Sub-scores reported by the audit service, each a 0-1 fraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditDiagnostics {
    pub performance: Option<f64>,
    pub seo: Option<f64>,
    pub accessibility: Option<f64>,
}

impl AuditDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.performance.is_none() && self.seo.is_none() && self.accessibility.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditResult {
    /// Rounded top-level score, kept as reported so the blender can judge it.
    pub score: Option<i64>,
    pub diagnostics: AuditDiagnostics,
    #[serde(skip_serializing)]
    pub screenshot: Option<String>,
    #[serde(skip_serializing)]
    pub raw: Value,
}

impl AuditResult {
    /// Parses an audit payload. A missing or non-numeric score becomes `None`
    /// instead of an error; only malformed JSON fails.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(payload)?;
        Ok(Self::from_value(raw))
    }

    pub fn from_value(raw: Value) -> Self {
        let score = match raw.get("score") {
            Some(value) => numeric_score(value),
            None => None,
        };
        if score.is_none() {
            tracing::warn!("audit payload has no usable score");
        }

        let diagnostics = AuditDiagnostics {
            performance: category_fraction(&raw, "performance"),
            seo: category_fraction(&raw, "seo"),
            accessibility: category_fraction(&raw, "accessibility"),
        };
        let screenshot = raw
            .get("screenshot")
            .and_then(Value::as_str)
            .filter(|data| !data.is_empty())
            .map(str::to_string);

        Self {
            score,
            diagnostics,
            screenshot,
            raw,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AssessError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| AssessError::AuditFailed(format!("{}: {}", path.display(), e)))
    }
}

fn numeric_score(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    if !number.is_finite() {
        return None;
    }
    Some(number.round() as i64)
}

fn category_fraction(raw: &Value, name: &str) -> Option<f64> {
    raw.get("categories")?
        .get(name)?
        .get("score")?
        .as_f64()
        .filter(|fraction| fraction.is_finite())
        .map(|fraction| fraction.clamp(0.0, 1.0))
}
