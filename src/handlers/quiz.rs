// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    bank::{BankCatalog, QuestionBank},
    config::Config,
    error::AppError,
    handlers::bank::find_bank,
    models::{distribution::DifficultyDistribution, exam::Paper, question::Question},
};

/// Query parameters for a difficulty-balanced quiz.
#[derive(Debug, Default, Deserialize)]
pub struct QuizParams {
    /// Number of questions. Negative values are treated as 0.
    pub count: Option<i64>,
    pub basic: Option<f64>,
    pub intermediate: Option<f64>,
    pub advanced: Option<f64>,
}

impl QuizParams {
    /// The requested distribution, or `None` when no share was given.
    /// Shares left out of a partial request count as 0.
    fn distribution(&self) -> Option<DifficultyDistribution> {
        if self.basic.is_none() && self.intermediate.is_none() && self.advanced.is_none() {
            return None;
        }
        Some(DifficultyDistribution::new(
            self.basic.unwrap_or(0.0),
            self.intermediate.unwrap_or(0.0),
            self.advanced.unwrap_or(0.0),
        ))
    }
}

/// Query parameters for an exam paper.
#[derive(Debug, Default, Deserialize)]
pub struct ExamParams {
    pub count: Option<i64>,
}

/// Resolves the paper size: bank default when absent, clamped at 0, capped by config.
fn resolve_count(requested: Option<i64>, bank: &QuestionBank, max: usize) -> Result<usize, AppError> {
    let count = match requested {
        None => bank.exam().total_questions,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    };

    if count > max {
        return Err(AppError::BadRequest(format!(
            "count must be at most {}, got {}",
            max, count
        )));
    }

    Ok(count)
}

fn paper<'a>(bank: &'a QuestionBank, questions: Vec<&'a Question>) -> Paper<'a> {
    let exam = bank.exam();
    Paper {
        bank_id: bank.id(),
        title: &exam.title,
        time_limit_secs: exam.time_limit_secs,
        pass_threshold: exam.pass_threshold,
        generated_at: chrono::Utc::now(),
        questions,
    }
}

/// Generates a random, difficulty-balanced quiz from a bank.
///
/// * `count` defaults to the bank's exam size.
/// * `basic` / `intermediate` / `advanced` override the bank's distribution (fractions of 1.0).
pub async fn generate_quiz(
    State(catalog): State<Arc<BankCatalog>>,
    State(config): State<Config>,
    Path(id): Path<String>,
    Query(params): Query<QuizParams>,
) -> Result<Response, AppError> {
    let bank = find_bank(&catalog, &id)?;
    let count = resolve_count(params.count, bank, config.max_quiz_size)?;
    let distribution = params
        .distribution()
        .unwrap_or(bank.exam().distribution);

    let questions = bank.random_questions(count, &distribution, &mut rand::thread_rng());

    tracing::info!(
        "Generated quiz from '{}': {} of {} requested questions",
        id,
        questions.len(),
        count
    );

    Ok(Json(paper(bank, questions)).into_response())
}

/// Generates a mock exam paper following the bank's exam blueprint.
pub async fn generate_exam(
    State(catalog): State<Arc<BankCatalog>>,
    State(config): State<Config>,
    Path(id): Path<String>,
    Query(params): Query<ExamParams>,
) -> Result<Response, AppError> {
    let bank = find_bank(&catalog, &id)?;
    let count = resolve_count(params.count, bank, config.max_quiz_size)?;

    let questions = bank.exam_questions(count, &mut rand::thread_rng());

    tracing::info!(
        "Generated exam from '{}': {} questions across {} categories",
        id,
        questions.len(),
        bank.exam().categories.len()
    );

    Ok(Json(paper(bank, questions)).into_response())
}
