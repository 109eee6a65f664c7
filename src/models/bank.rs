// src/models/bank.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    bank::QuestionBank,
    models::{exam::ExamConfig, question::Difficulty},
};

/// DTO for listing banks without their questions.
#[derive(Debug, Serialize)]
pub struct BankSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub total_questions: usize,
    pub difficulty_counts: BTreeMap<Difficulty, usize>,
}

impl<'a> From<&'a QuestionBank> for BankSummary<'a> {
    fn from(bank: &'a QuestionBank) -> Self {
        let mut difficulty_counts: BTreeMap<Difficulty, usize> =
            Difficulty::ALL.iter().map(|&d| (d, 0)).collect();
        for q in bank.questions() {
            *difficulty_counts.entry(q.difficulty).or_default() += 1;
        }

        Self {
            id: bank.id(),
            title: bank.title(),
            total_questions: bank.len(),
            difficulty_counts,
        }
    }
}

/// DTO for a single bank: its summary plus the exam blueprint.
#[derive(Debug, Serialize)]
pub struct BankDetail<'a> {
    #[serde(flatten)]
    pub summary: BankSummary<'a>,
    pub exam: &'a ExamConfig,
}

impl<'a> From<&'a QuestionBank> for BankDetail<'a> {
    fn from(bank: &'a QuestionBank) -> Self {
        Self {
            summary: BankSummary::from(bank),
            exam: bank.exam(),
        }
    }
}
