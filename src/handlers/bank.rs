// src/handlers/bank.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    bank::{BankCatalog, QuestionBank},
    error::AppError,
    models::{
        bank::{BankDetail, BankSummary},
        question::{Difficulty, Question},
    },
};

/// Query parameters for filtering a bank's questions. All given filters must match.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionFilter {
    pub section: Option<String>,
    pub section_prefix: Option<String>,
    pub difficulty: Option<String>,
    pub topic: Option<String>,
    pub category: Option<String>,
}

/// Looks up a bank or fails with 404.
pub(crate) fn find_bank<'a>(catalog: &'a BankCatalog, id: &str) -> Result<&'a QuestionBank, AppError> {
    catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Question bank '{}' not found", id)))
}

/// Lists all loaded banks.
pub async fn list_banks(State(catalog): State<Arc<BankCatalog>>) -> impl IntoResponse {
    let summaries: Vec<BankSummary> = catalog.iter().map(BankSummary::from).collect();
    Json(summaries).into_response()
}

/// Retrieves a single bank's summary and exam blueprint.
pub async fn get_bank(
    State(catalog): State<Arc<BankCatalog>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let bank = find_bank(&catalog, &id)?;
    Ok(Json(BankDetail::from(bank)).into_response())
}

/// Lists a bank's questions, optionally filtered by section, difficulty, topic and category.
pub async fn list_questions(
    State(catalog): State<Arc<BankCatalog>>,
    Path(id): Path<String>,
    Query(filter): Query<QuestionFilter>,
) -> Result<Response, AppError> {
    let bank = find_bank(&catalog, &id)?;

    let difficulty = filter
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let matches = |q: &Question| {
        filter.section.as_deref().is_none_or(|s| q.section == s)
            && filter.section_prefix.as_deref().is_none_or(|p| q.in_section(p))
            && difficulty.is_none_or(|d| q.difficulty == d)
            && filter.topic.as_deref().is_none_or(|t| q.topic.eq_ignore_ascii_case(t))
            && filter
                .category
                .as_deref()
                .is_none_or(|c| q.category.as_deref() == Some(c))
    };

    let questions = bank.filter(matches);
    tracing::debug!("Bank '{}': {} questions match {:?}", id, questions.len(), filter);

    Ok(Json(questions).into_response())
}

/// Runs the bank validator with the bank's own policy.
pub async fn bank_report(
    State(catalog): State<Arc<BankCatalog>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let bank = find_bank(&catalog, &id)?;
    let report = bank.validate();

    if !report.is_valid {
        tracing::warn!("Bank '{}' has {} validation issues", id, report.issues.len());
    }

    Ok(Json(report).into_response())
}
