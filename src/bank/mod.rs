// src/bank/mod.rs

pub mod catalog;
pub mod loader;

use std::sync::Arc;

use rand::Rng;

use crate::{
    models::{
        distribution::DifficultyDistribution,
        exam::ExamConfig,
        question::{Difficulty, Question},
    },
    sampling::{self, ValidationPolicy, ValidationReport},
};

pub use catalog::BankCatalog;

/// An immutable question bank for one course module or mock exam.
///
/// Built once when content is loaded; clones share the same question storage.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    id: String,
    title: String,
    questions: Arc<[Question]>,
    exam: ExamConfig,
    policy: ValidationPolicy,
}

impl QuestionBank {
    pub fn new(id: impl Into<String>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            exam: ExamConfig::with_title(title.clone()),
            title,
            questions: questions.into(),
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_exam(mut self, exam: ExamConfig) -> Self {
        self.exam = exam;
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn exam(&self) -> &ExamConfig {
        &self.exam
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions tagged with exactly this section.
    pub fn by_section(&self, section: &str) -> Vec<&Question> {
        self.filter(|q| q.section == section)
    }

    /// Questions in this section or any subsection of it ("5.1" covers "5.1.3").
    pub fn by_section_prefix(&self, prefix: &str) -> Vec<&Question> {
        self.filter(|q| q.in_section(prefix))
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Question> {
        self.filter(|q| q.difficulty == difficulty)
    }

    /// Case-insensitive topic match.
    pub fn by_topic(&self, topic: &str) -> Vec<&Question> {
        self.filter(|q| q.topic.eq_ignore_ascii_case(topic))
    }

    pub fn by_category(&self, category: &str) -> Vec<&Question> {
        self.filter(|q| q.category.as_deref() == Some(category))
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.questions.iter().filter(|&q| predicate(q)).collect()
    }

    /// Difficulty-balanced random paper. See [`sampling::get_random_questions`].
    pub fn random_questions<R: Rng + ?Sized>(
        &self,
        count: usize,
        distribution: &DifficultyDistribution,
        rng: &mut R,
    ) -> Vec<&Question> {
        sampling::get_random_questions(&self.questions, count, distribution, rng)
    }

    /// Paper following this bank's exam blueprint: category-balanced when the
    /// blueprint lists categories, difficulty-balanced otherwise.
    pub fn exam_questions<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Question> {
        sampling::get_balanced_questions(
            &self.questions,
            count,
            &self.exam.categories,
            &self.exam.distribution,
            rng,
        )
    }

    pub fn validate(&self) -> ValidationReport {
        sampling::validate(&self.questions, &self.policy)
    }
}
