use crate::error::{AssessError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Survey dimension. The set is closed; every variant is scoreable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Visibility,
    AdvertisingFrequency,
    Goals,
    CampaignManagement,
    ReviewSentiment,
    PriorCampaigns,
    BusinessPhase,
    ImplementationTimeframe,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Visibility,
        Category::AdvertisingFrequency,
        Category::Goals,
        Category::CampaignManagement,
        Category::ReviewSentiment,
        Category::PriorCampaigns,
        Category::BusinessPhase,
        Category::ImplementationTimeframe,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::AdvertisingFrequency => "advertising_frequency",
            Self::Goals => "goals",
            Self::CampaignManagement => "campaign_management",
            Self::ReviewSentiment => "review_sentiment",
            Self::PriorCampaigns => "prior_campaigns",
            Self::BusinessPhase => "business_phase",
            Self::ImplementationTimeframe => "implementation_timeframe",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| AssessError::AnswersParse(format!("unknown category: {normalized}")))
    }
}

/// A submitted value: one option, or a set of options for multi-select questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl Answer {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Blank singles and empty selections carry no answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.trim().is_empty(),
            Self::Multiple(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }
}

/// Only answered categories are stored, so serialized answers never carry blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormAnswers {
    entries: BTreeMap<Category, Answer>,
}

impl FormAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, answer: Answer) -> Self {
        self.set(category, answer);
        self
    }

    /// Replaces any previous answer for the category. A blank answer clears it.
    pub fn set(&mut self, category: Category, answer: Answer) {
        let answer = match answer {
            Answer::Multiple(values) => Answer::Multiple(
                values
                    .into_iter()
                    .filter(|value| !value.trim().is_empty())
                    .collect(),
            ),
            single => single,
        };
        if answer.is_empty() {
            self.entries.remove(&category);
        } else {
            self.entries.insert(category, answer);
        }
    }

    pub fn remove(&mut self, category: Category) -> Option<Answer> {
        self.entries.remove(&category)
    }

    pub fn get(&self, category: Category) -> Option<&Answer> {
        self.entries
            .get(&category)
            .filter(|answer| !answer.is_empty())
    }

    pub fn answered(&self) -> impl Iterator<Item = (Category, &Answer)> {
        self.entries
            .iter()
            .filter(|(_, answer)| !answer.is_empty())
            .map(|(category, answer)| (*category, answer))
    }

    pub fn answered_count(&self) -> usize {
        self.answered().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }

    /// Builds answers from raw string keys, dropping keys that name no category.
    pub fn from_raw(raw: BTreeMap<String, Answer>) -> Self {
        let mut answers = Self::new();
        for (key, answer) in raw {
            match key.parse::<Category>() {
                Ok(category) => answers.set(category, answer),
                Err(_) => tracing::warn!(key = %key, "ignoring answer for unknown category"),
            }
        }
        answers
    }

    /// Reads answers from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AssessError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let raw: BTreeMap<String, Answer> = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| AssessError::AnswersParse(format!("{}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)
                .map_err(|e| AssessError::AnswersParse(format!("{}: {}", path.display(), e)))?
        };
        Ok(Self::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn category_parses_snake_case_keys() {
        assert_eq!(
            "implementation_timeframe".parse::<Category>().expect("known key"),
            Category::ImplementationTimeframe
        );
        assert!("Visibility".parse::<Category>().is_err());
    }

    #[test]
    fn blank_answers_are_not_counted() {
        let answers = FormAnswers::new()
            .with(Category::Visibility, Answer::single("  "))
            .with(Category::Goals, Answer::multiple(Vec::<String>::new()))
            .with(Category::BusinessPhase, Answer::single("growing"));
        assert_eq!(answers.answered_count(), 1);
        assert!(answers.get(Category::Visibility).is_none());
    }

    #[test]
    fn blank_answers_are_not_serialized() {
        let answers = FormAnswers::new()
            .with(Category::Visibility, Answer::single("  "))
            .with(Category::Goals, Answer::multiple(["", "more_online", " "]))
            .with(Category::PriorCampaigns, Answer::multiple([" "]));
        let json = serde_json::to_value(&answers).expect("answers should serialize");
        assert_eq!(json, serde_json::json!({ "goals": ["more_online"] }));
    }

    #[test]
    fn blank_answer_clears_previous_value() {
        let mut answers = FormAnswers::new().with(Category::Visibility, Answer::single("print"));
        answers.set(Category::Visibility, Answer::single(""));
        assert!(answers.is_empty());
    }

    #[test]
    fn load_drops_blank_answers() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(&path, "visibility = \"  \"\ngoals = []\nbusiness_phase = \"growing\"\n")
            .expect("answers should write");

        let answers = FormAnswers::load(&path).expect("answers should load");
        let json = serde_json::to_value(&answers).expect("answers should serialize");
        assert_eq!(json, serde_json::json!({ "business_phase": "growing" }));
    }

    #[test]
    fn set_overwrites_previous_answer() {
        let mut answers = FormAnswers::new();
        answers.set(Category::Visibility, Answer::single("print"));
        answers.set(Category::Visibility, Answer::single("social_media"));
        assert_eq!(
            answers.get(Category::Visibility),
            Some(&Answer::single("social_media"))
        );
    }

    #[test]
    fn load_toml_accepts_single_and_multi_select_values() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(
            &path,
            r#"
visibility = "social_media"
goals = ["more_online", "brand_awareness"]
favourite_colour = "blue"
"#,
        )
        .expect("answers should write");

        let answers = FormAnswers::load(&path).expect("answers should load");
        assert_eq!(answers.answered_count(), 2);
        assert_eq!(
            answers.get(Category::Goals),
            Some(&Answer::multiple(["brand_awareness", "more_online"]))
        );
    }

    #[test]
    fn load_json_answers() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.json");
        fs::write(&path, r#"{"visibility": "search_engines", "business_phase": "startup"}"#)
            .expect("answers should write");

        let answers = FormAnswers::load(&path).expect("answers should load");
        assert_eq!(
            answers.get(Category::Visibility),
            Some(&Answer::single("search_engines"))
        );
        assert_eq!(answers.answered_count(), 2);
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = FormAnswers::load(&dir.path().join("nope.toml")).expect_err("should fail");
        assert!(matches!(err, AssessError::PathNotFound(_)));
    }

    #[test]
    fn load_rejects_non_string_values() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(&path, "visibility = 3\n").expect("answers should write");
        let err = FormAnswers::load(&path).expect_err("should fail");
        assert!(matches!(err, AssessError::AnswersParse(_)));
    }
}
