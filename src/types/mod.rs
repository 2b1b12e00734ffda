pub mod answers;
pub mod config;
pub mod report;
pub mod scoring;
