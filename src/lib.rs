//! Scoring core for the marketing visibility assessment.
//!
//! Survey answers are weighted per category ([`scoring::weights`]), averaged into
//! a form score, blended with an optional website audit score, and classified
//! into a tier that selects the report's messaging and recommendations.
//! [`scoring::ScoreSession`] holds one user's inputs and keeps the derived
//! [`types::scoring::ScoreState`] current.
//!
//! The [`audit`] and [`delivery`] modules are the two network boundaries: the
//! website analysis service and the report webhook.

pub mod audit;
pub mod config;
pub mod delivery;
pub mod error;
pub mod report;
pub mod scoring;
pub mod types;
