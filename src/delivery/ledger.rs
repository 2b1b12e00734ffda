//! Client-local bookkeeping of report sends, used to rate-limit email delivery.
//!
//! Recipients are stored as SHA-256 digests of their lowercase address so the
//! ledger never holds plain email addresses.

use crate::error::{AssessError, Result};
use crate::types::config::RateLimitConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    sends: BTreeMap<String, Vec<DateTime<Utc>>>,
}

#[derive(Debug, Clone)]
pub struct SendLedger {
    path: PathBuf,
    max_sends: usize,
    window: Duration,
    file: LedgerFile,
}

fn recipient_key(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

impl SendLedger {
    pub fn open(config: &RateLimitConfig) -> Result<Self> {
        let file = if config.ledger_file.exists() {
            let content = std::fs::read_to_string(&config.ledger_file)?;
            match serde_json::from_str::<LedgerFile>(&content) {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!(
                        path = %config.ledger_file.display(),
                        error = %e,
                        "send ledger unreadable, starting fresh"
                    );
                    LedgerFile::default()
                }
            }
        } else {
            LedgerFile::default()
        };

        Ok(Self {
            path: config.ledger_file.clone(),
            max_sends: config.max_sends as usize,
            window: Duration::minutes(i64::from(config.window_minutes)),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops sends that fell out of the window, then rejects the recipient if
    /// the remaining count already reached the limit.
    pub fn check(&mut self, email: &str, now: DateTime<Utc>) -> Result<()> {
        self.prune(now);
        let key = recipient_key(email);
        let Some(sends) = self.file.sends.get(&key) else {
            return Ok(());
        };
        if sends.len() < self.max_sends {
            return Ok(());
        }

        let oldest = sends.iter().min().copied().unwrap_or(now);
        let remaining = (oldest + self.window) - now;
        // round up to whole minutes, never below one
        let retry_after_minutes = ((remaining.num_seconds() + 59) / 60).max(1);
        tracing::warn!(retry_after_minutes, "report send rate limited");
        Err(AssessError::RateLimited {
            retry_after_minutes,
        })
    }

    pub fn record(&mut self, email: &str, now: DateTime<Utc>) {
        self.file
            .sends
            .entry(recipient_key(email))
            .or_default()
            .push(now);
    }

    pub fn sends_in_window(&self, email: &str, now: DateTime<Utc>) -> usize {
        self.file
            .sends
            .get(&recipient_key(email))
            .map(|sends| sends.iter().filter(|sent| now - **sent < self.window).count())
            .unwrap_or(0)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn prune(&mut self, now: DateTime<Utc>) {
        let window = self.window;
        for sends in self.file.sends.values_mut() {
            sends.retain(|sent| now - *sent < window);
        }
        self.file.sends.retain(|_, sends| !sends.is_empty());
    }
}
