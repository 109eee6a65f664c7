// src/bank/loader.rs

use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use validator::Validate;

use crate::{
    bank::QuestionBank,
    error::AppError,
    models::{exam::ExamConfig, question::Question},
    sampling::ValidationPolicy,
};

/// On-disk layout of a bank file.
#[derive(Debug, Deserialize)]
pub struct BankFile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub exam: Option<ExamConfig>,
    #[serde(default)]
    pub validation: Option<ValidationPolicy>,
    pub questions: Vec<Question>,
}

/// Reads and checks a single bank file.
pub fn load_bank_file(path: &Path) -> Result<QuestionBank, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read bank file {}: {:?}", path.display(), e);
        AppError::InternalServerError(format!("{}: {}", path.display(), e))
    })?;

    let file: BankFile = serde_json::from_str(&raw)
        .map_err(|e| AppError::InvalidBank(format!("{}: {}", path.display(), e)))?;

    parse_bank(file)
}

/// Checks every record of a deserialized bank file and builds the bank.
///
/// * Field rules come from the `Validate` derive on [`Question`].
/// * `correct_answer` must index into `options`.
/// * Question ids must be unique within the bank.
pub fn parse_bank(file: BankFile) -> Result<QuestionBank, AppError> {
    if file.id.trim().is_empty() {
        return Err(AppError::InvalidBank("Bank id cannot be empty".to_string()));
    }

    let mut seen = HashSet::with_capacity(file.questions.len());
    for q in &file.questions {
        q.validate().map_err(|e| {
            AppError::InvalidBank(format!("Bank '{}', question {}: {}", file.id, q.id, e))
        })?;

        if !q.has_valid_answer() {
            return Err(AppError::InvalidBank(format!(
                "Bank '{}', question {}: correct_answer {} is out of range for {} options",
                file.id,
                q.id,
                q.correct_answer,
                q.options.len()
            )));
        }

        if !seen.insert(&q.id) {
            return Err(AppError::InvalidBank(format!(
                "Bank '{}': duplicate question id {}",
                file.id, q.id
            )));
        }
    }

    let mut exam = file
        .exam
        .unwrap_or_else(|| ExamConfig::with_title(file.title.clone()));
    if exam.title.trim().is_empty() {
        exam.title = file.title.clone();
    }

    tracing::debug!("Parsed bank '{}' with {} questions", file.id, file.questions.len());

    Ok(QuestionBank::new(file.id, file.title, file.questions)
        .with_exam(exam)
        .with_policy(file.validation.unwrap_or_default()))
}
