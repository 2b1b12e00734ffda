use crate::audit::AuditDiagnostics;
use crate::types::answers::FormAnswers;
use crate::types::scoring::ScoreState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub state: ScoreState,
    pub headline: String,
    pub summary: String,
    pub primary_channel: Option<String>,
    pub recommendations: Vec<String>,
    pub answered: FormAnswers,
    pub diagnostics: Option<AuditDiagnostics>,
}
