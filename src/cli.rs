use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "visiscore",
    version,
    about = "Marketing visibility assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for visiscore.toml and .visiscore/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a set of answers and print the report
    Score(ScoreCommand),
    /// Run the website audit for a url
    Audit(AuditCommand),
    /// Score answers and deliver the report to the webhook
    Send(SendCommand),
    /// Print the option weight table
    Weights(WeightsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Where the audit score comes from, if anywhere.
#[derive(Args, Clone, Debug, Default)]
pub struct AuditSource {
    /// Audit payload previously saved as JSON
    #[arg(long, conflicts_with = "url")]
    pub audit_file: Option<PathBuf>,

    /// Website to audit live
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answers file (.toml or .json)
    pub answers: PathBuf,
    #[command(flatten)]
    pub audit: AuditSource,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when the final score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

#[derive(Args)]
pub struct AuditCommand {
    pub url: String,
}

#[derive(Args)]
pub struct SendCommand {
    /// Answers file (.toml or .json)
    pub answers: PathBuf,
    #[command(flatten)]
    pub audit: AuditSource,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub locale: Option<String>,
    #[arg(long)]
    pub webhook_url: Option<String>,
    /// Print the payload instead of posting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct WeightsCommand {
    /// Only show one category
    #[arg(long)]
    pub category: Option<String>,
}
