// src/models/question.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier of a question within its bank.
/// Course banks number their questions, mock exams sometimes tag them ("am2-017").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Tag(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Tag(t) => write!(f, "{}", t),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(n: i64) -> Self {
        QuestionId::Number(n)
    }
}

/// Difficulty label of a question. The sampler buckets on this field only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Difficulty::Basic),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("Unknown difficulty '{}'", other)),
        }
    }
}

/// A multiple-choice question as stored in a bank file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    pub id: QuestionId,

    /// The text shown to the learner.
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,

    /// Answer choices in display order.
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// Index into `options` of the correct choice.
    pub correct_answer: usize,

    /// Rationale shown after the learner answers.
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub explanation: String,

    /// Dotted curriculum placement, e.g. "5.3.2".
    #[validate(length(max = 50))]
    #[serde(default)]
    pub section: String,

    pub difficulty: Difficulty,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub topic: String,

    /// Exam blueprint category, used by category-balanced papers.
    #[validate(length(min = 1, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Question {
    /// Checks the `correct_answer` index against the option list.
    pub fn has_valid_answer(&self) -> bool {
        self.correct_answer < self.options.len()
    }

    /// True when the section equals `prefix` or sits below it in the dotted hierarchy.
    pub fn in_section(&self, prefix: &str) -> bool {
        match self.section.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() < 2 {
        return Err(validator::ValidationError::new("too_few_options"));
    }
    for opt in options {
        if opt.trim().is_empty() {
            return Err(validator::ValidationError::new("option_cannot_be_empty"));
        }
        if opt.len() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}
