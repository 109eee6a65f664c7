// src/models/distribution.rs

use serde::{Deserialize, Serialize};

use crate::models::question::Difficulty;

/// Target share of each difficulty in a generated paper, as fractions of 1.0.
///
/// Missing keys deserialize as zero. Shares are used as given: a distribution
/// that does not sum to 1.0 is neither normalized nor rejected, and
/// `intermediate` absorbs whatever `basic` and `advanced` leave over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    #[serde(default)]
    pub basic: f64,
    #[serde(default)]
    pub intermediate: f64,
    #[serde(default)]
    pub advanced: f64,
}

impl Default for DifficultyDistribution {
    fn default() -> Self {
        Self {
            basic: 0.40,
            intermediate: 0.45,
            advanced: 0.15,
        }
    }
}

/// Number of questions to draw from each difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DifficultyTargets {
    pub basic: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl DifficultyDistribution {
    pub fn new(basic: f64, intermediate: f64, advanced: f64) -> Self {
        Self {
            basic,
            intermediate,
            advanced,
        }
    }

    /// Splits `count` into per-difficulty targets.
    ///
    /// Basic and advanced are rounded independently; intermediate takes the
    /// remainder so the targets add up to `count` whenever the shares allow it.
    pub fn targets(&self, count: usize) -> DifficultyTargets {
        let basic = rounded_share(count, self.basic);
        let advanced = rounded_share(count, self.advanced);
        let intermediate = count.saturating_sub(basic).saturating_sub(advanced);

        DifficultyTargets {
            basic,
            intermediate,
            advanced,
        }
    }
}

impl DifficultyTargets {
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Basic => self.basic,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }

    pub fn total(&self) -> usize {
        self.basic
            .saturating_add(self.intermediate)
            .saturating_add(self.advanced)
    }
}

// Half-way cases round up, negative and NaN shares draw nothing, and no
// single bucket asks for more than `count`.
fn rounded_share(count: usize, share: f64) -> usize {
    let value = (count as f64 * share).round();
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.min(count as f64) as usize
    }
}
