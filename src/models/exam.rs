// src/models/exam.rs

use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_QUIZ_SIZE,
    models::{distribution::DifficultyDistribution, question::Question},
};

/// Mock exam blueprint attached to a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    /// Empty in a bank file means "use the bank title".
    #[serde(default)]
    pub title: String,

    /// Default number of questions in a generated paper.
    #[serde(default = "default_total_questions")]
    pub total_questions: usize,

    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,

    /// Percentage needed to pass. Passed through to the client as-is.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u8,

    /// Categories a paper is spread across, in blueprint order.
    /// Empty means plain difficulty sampling.
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub distribution: DifficultyDistribution,
}

fn default_total_questions() -> usize {
    DEFAULT_QUIZ_SIZE
}

fn default_time_limit() -> u64 {
    45 * 60
}

fn default_pass_threshold() -> u8 {
    60
}

impl ExamConfig {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            total_questions: default_total_questions(),
            time_limit_secs: default_time_limit(),
            pass_threshold: default_pass_threshold(),
            categories: Vec::new(),
            distribution: DifficultyDistribution::default(),
        }
    }
}

/// A generated quiz or exam paper, ready for the presentation layer.
#[derive(Debug, Serialize)]
pub struct Paper<'a> {
    pub bank_id: &'a str,
    pub title: &'a str,
    pub time_limit_secs: u64,
    pub pass_threshold: u8,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<&'a Question>,
}
