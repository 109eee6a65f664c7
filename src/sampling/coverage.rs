// src/sampling/coverage.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::question::{Difficulty, Question};

/// Accepted percentage range for one difficulty's share of a bank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBand {
    pub min_percent: f64,
    pub max_percent: f64,
}

impl PercentBand {
    pub const fn new(min_percent: f64, max_percent: f64) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.min_percent && percent <= self.max_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyBands {
    pub basic: PercentBand,
    pub intermediate: PercentBand,
    pub advanced: PercentBand,
}

impl Default for DifficultyBands {
    fn default() -> Self {
        Self {
            basic: PercentBand::new(30.0, 50.0),
            intermediate: PercentBand::new(35.0, 55.0),
            advanced: PercentBand::new(10.0, 25.0),
        }
    }
}

impl DifficultyBands {
    pub fn get(&self, difficulty: Difficulty) -> &PercentBand {
        match difficulty {
            Difficulty::Basic => &self.basic,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
        }
    }
}

/// Content-tuning thresholds a bank is checked against.
/// Every field can be overridden per bank file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub min_total: usize,

    /// Top-level section tags that must have at least one question, e.g. "5.1".
    pub expected_sections: Vec<String>,

    pub bands: DifficultyBands,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_total: 200,
            expected_sections: Vec::new(),
            bands: DifficultyBands::default(),
        }
    }
}

/// Coverage and balance findings for a bank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub total_count: usize,
    pub section_counts: BTreeMap<String, usize>,
    pub difficulty_counts: BTreeMap<Difficulty, usize>,
    pub issues: Vec<String>,
}

/// Counts a bank per section and difficulty and reports anything outside `policy`.
///
/// Purely diagnostic: findings are returned as issue strings, nothing is rejected.
pub fn validate(bank: &[Question], policy: &ValidationPolicy) -> ValidationReport {
    let total_count = bank.len();
    let mut issues = Vec::new();

    let mut section_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut difficulty_counts: BTreeMap<Difficulty, usize> =
        Difficulty::ALL.iter().map(|&d| (d, 0)).collect();

    for q in bank {
        *section_counts.entry(q.section.clone()).or_default() += 1;
        *difficulty_counts.entry(q.difficulty).or_default() += 1;
    }

    if total_count < policy.min_total {
        issues.push(format!(
            "Insufficient questions: {} (recommended: {}+)",
            total_count, policy.min_total
        ));
    }

    for expected in &policy.expected_sections {
        let covered = bank.iter().any(|q| q.in_section(expected));
        if !covered {
            issues.push(format!("No questions found for section {}", expected));
        }
    }

    for difficulty in Difficulty::ALL {
        let count = difficulty_counts.get(&difficulty).copied().unwrap_or(0);
        let percent = percentage(count, total_count);
        let band = policy.bands.get(difficulty);

        if !band.contains(percent) {
            issues.push(format!(
                "{} questions percentage out of range: {:.1}% (recommended: {}-{}%)",
                capitalize(difficulty.as_str()),
                percent,
                band.min_percent,
                band.max_percent
            ));
        }
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        total_count,
        section_counts,
        difficulty_counts,
        issues,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
