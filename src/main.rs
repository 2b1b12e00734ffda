mod cli;

use clap::Parser;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use visiscore::audit::{AuditClient, AuditClientConfig, AuditResult};
use visiscore::config::{self, LoadedConfig};
use visiscore::delivery::{Contact, ReportPayload, SendLedger, WebhookClient, WebhookClientConfig};
use visiscore::error::{AssessError, Result};
use visiscore::report;
use visiscore::scoring::{self, ScoreSession};
use visiscore::types::answers::{Category, FormAnswers};
use visiscore::types::config::ReportFormatSetting;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RATE_LIMITED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Audit failures are recoverable: the report falls back to form-only scoring.
fn resolve_audit(source: &cli::AuditSource, loaded: &LoadedConfig) -> Result<Option<AuditResult>> {
    if let Some(path) = &source.audit_file {
        if !path.exists() {
            return Err(AssessError::PathNotFound(path.display().to_string()));
        }
        return match AuditResult::load(path) {
            Ok(audit) => Ok(Some(audit)),
            Err(e) => {
                tracing::warn!(error = %e, "audit file unusable, scoring from answers only");
                Ok(None)
            }
        };
    }

    let Some(url) = &source.url else {
        return Ok(None);
    };
    let client = AuditClient::new(AuditClientConfig::from(&loaded.config.audit))?;
    match client.fetch(url) {
        Ok(audit) => Ok(Some(audit)),
        Err(e) => {
            tracing::warn!(error = %e, "website audit failed, scoring from answers only");
            Ok(None)
        }
    }
}

fn build_session(
    answers_path: &Path,
    source: &cli::AuditSource,
    loaded: &LoadedConfig,
) -> Result<ScoreSession> {
    let answers = FormAnswers::load(answers_path)?;
    let audit = resolve_audit(source, loaded)?;
    Ok(ScoreSession::from_inputs(answers, audit))
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(&cli.project_dir)?;
            let session = build_session(&cmd.answers, &cmd.audit, &loaded)?;
            let state = session.state();
            tracing::info!(
                form_score = state.form_score,
                website_score = ?state.website_score,
                final_score = state.final_score,
                tier = %state.tier,
                "assessment scored"
            );

            let output_format = match (cmd.format, loaded.config.report.format) {
                (Some(cli::ReportFormat::Json), _) | (None, ReportFormatSetting::Json) => {
                    report::OutputFormat::Json
                }
                (Some(cli::ReportFormat::Md), _) | (None, ReportFormatSetting::Md) => {
                    report::OutputFormat::Md
                }
            };
            let rendered = report::render(&session.report(), output_format)?;
            println!("{rendered}");

            match cmd.fail_under {
                Some(threshold) if state.final_score < threshold => {
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Audit(cmd) => {
            let loaded = config::load_config(&cli.project_dir)?;
            let client = AuditClient::new(AuditClientConfig::from(&loaded.config.audit))?;
            let audit = client.fetch(&cmd.url)?;
            let summary = serde_json::json!({
                "url": cmd.url,
                "score": audit.score,
                "reliable": scoring::blend::reliable_website_score(audit.score).is_some(),
                "diagnostics": audit.diagnostics,
                "has_screenshot": audit.screenshot.is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Send(cmd) => {
            let loaded = config::load_config(&cli.project_dir)?;
            let contact = Contact::new(&cmd.name, &cmd.email, cmd.company.as_deref())?;
            let now = chrono::Utc::now();

            // rejected recipients never trigger an audit call
            let mut ledger = SendLedger::open(&loaded.config.rate_limit)?;
            if !cmd.dry_run {
                ledger.check(&contact.email, now)?;
            }

            let session = build_session(&cmd.answers, &cmd.audit, &loaded)?;
            let locale = cmd
                .locale
                .as_deref()
                .unwrap_or(loaded.config.report.locale.as_str())
                .to_string();
            let payload =
                ReportPayload::new(contact, session.answers(), session.state(), &locale, now);

            if cmd.dry_run {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(exit_code::SUCCESS);
            }

            let client = WebhookClient::new(WebhookClientConfig::resolve(
                &loaded.config.webhook,
                cmd.webhook_url.as_deref(),
            )?)?;
            client.send(&payload)?;

            ledger.record(&payload.contact.email, now);
            if let Err(e) = ledger.save() {
                tracing::warn!(path = %ledger.path().display(), error = %e, "could not persist send ledger");
            }
            println!(
                "report sent to {} (score {}, {})",
                payload.contact.email, payload.final_score, payload.tier
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(cmd) => {
            let categories = match cmd.category.as_deref() {
                Some(key) => vec![key.parse::<Category>()?],
                None => Category::ALL.to_vec(),
            };
            println!("{}", report::md::weight_table(&categories));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(AssessError::RateLimited {
            retry_after_minutes,
        }) => {
            eprintln!(
                "error: too many reports sent to this address, try again in {retry_after_minutes} minute(s)"
            );
            std::process::exit(exit_code::RATE_LIMITED);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
