pub mod blend;
pub mod form;
pub mod tier;
pub mod weights;

use crate::audit::AuditResult;
use crate::types::answers::{Answer, Category, FormAnswers};
use crate::types::report::AssessmentReport;
use crate::types::scoring::ScoreState;

pub use blend::compute_final_score;
pub use form::compute_form_score;
pub use tier::{classify, select_recommendations};

/// Computes every derived score for one snapshot of inputs.
pub fn evaluate(answers: &FormAnswers, audit: Option<&AuditResult>) -> ScoreState {
    let form_score = form::compute_form_score(answers);
    let raw_website = audit.and_then(|audit| audit.score);
    let website_score = blend::reliable_website_score(raw_website);
    if raw_website.is_some() && website_score.is_none() {
        tracing::warn!(score = ?raw_website, "ignoring unreliable audit score");
    }
    let final_score = blend::blend_scores(raw_website, form_score);

    ScoreState {
        form_score,
        website_score,
        final_score,
        tier: tier::classify(final_score),
    }
}

/// Per-session scoring state. Each mutation recomputes the scores, so
/// [`ScoreSession::state`] always reflects the latest inputs.
#[derive(Debug, Clone, Default)]
pub struct ScoreSession {
    answers: FormAnswers,
    audit: Option<AuditResult>,
    state: ScoreState,
}

impl ScoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inputs(answers: FormAnswers, audit: Option<AuditResult>) -> Self {
        let mut session = Self {
            answers,
            audit,
            state: ScoreState::default(),
        };
        session.recompute();
        session
    }

    pub fn set_answer(&mut self, category: Category, answer: Answer) -> ScoreState {
        self.answers.set(category, answer);
        self.recompute()
    }

    pub fn clear_answer(&mut self, category: Category) -> ScoreState {
        self.answers.remove(category);
        self.recompute()
    }

    pub fn set_audit(&mut self, audit: AuditResult) -> ScoreState {
        self.audit = Some(audit);
        self.recompute()
    }

    pub fn clear_audit(&mut self) -> ScoreState {
        self.audit = None;
        self.recompute()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    pub fn audit(&self) -> Option<&AuditResult> {
        self.audit.as_ref()
    }

    pub fn report(&self) -> AssessmentReport {
        let primary_channel = tier::primary_channel(&self.answers);
        let recommendations = tier::select_recommendations(primary_channel)
            .iter()
            .map(|line| (*line).to_string())
            .collect();

        AssessmentReport {
            state: self.state,
            headline: tier::headline(self.state.tier).to_string(),
            summary: tier::summary(self.state.tier).to_string(),
            primary_channel: primary_channel.map(str::to_string),
            recommendations,
            answered: self.answers.clone(),
            diagnostics: self
                .audit
                .as_ref()
                .map(|audit| audit.diagnostics.clone())
                .filter(|diagnostics| !diagnostics.is_empty()),
        }
    }

    fn recompute(&mut self) -> ScoreState {
        self.state = evaluate(&self.answers, self.audit.as_ref());
        self.state
    }
}
