// src/sampling/sampler.rs

use std::collections::HashSet;

use rand::Rng;

use crate::{
    models::{
        distribution::{DifficultyDistribution, DifficultyTargets},
        question::{Difficulty, Question},
    },
    sampling::shuffle::{shuffle, take_random},
};

/// Draws a shuffled, difficulty-balanced paper of `count` questions.
///
/// * Each difficulty bucket contributes its target (see [`DifficultyDistribution::targets`]),
///   or everything it has when it is short.
/// * Shortfalls are backfilled from the questions not yet picked, whatever their difficulty.
/// * The result is shuffled once more so it is not grouped by difficulty.
///
/// The output holds `min(count, bank.len())` distinct questions borrowed from `bank`.
pub fn get_random_questions<'a, R: Rng + ?Sized>(
    bank: &'a [Question],
    count: usize,
    distribution: &DifficultyDistribution,
    rng: &mut R,
) -> Vec<&'a Question> {
    if count == 0 || bank.is_empty() {
        return Vec::new();
    }

    let pool: Vec<usize> = (0..bank.len()).collect();
    let mut picked = draw_by_difficulty(bank, &pool, distribution.targets(count), rng);
    backfill(&mut picked, bank.len(), count, rng);

    finish(bank, picked, count, rng)
}

/// Draws a paper spread evenly across `categories`, difficulty-balanced within each.
///
/// Category `i` gets `count / n` questions, plus one while `i < count % n`.
/// Categories without questions contribute nothing and the gap is backfilled
/// from the whole bank. An empty category list falls back to [`get_random_questions`].
pub fn get_balanced_questions<'a, S: AsRef<str>, R: Rng + ?Sized>(
    bank: &'a [Question],
    count: usize,
    categories: &[S],
    distribution: &DifficultyDistribution,
    rng: &mut R,
) -> Vec<&'a Question> {
    if categories.is_empty() {
        return get_random_questions(bank, count, distribution, rng);
    }
    if count == 0 || bank.is_empty() {
        return Vec::new();
    }

    // A category listed twice would draw from the same pool twice.
    let mut seen = HashSet::new();
    let categories: Vec<&str> = categories
        .iter()
        .map(|c| AsRef::<str>::as_ref(c))
        .filter(|c| seen.insert(*c))
        .collect();

    let per_category = count / categories.len();
    let remainder = count % categories.len();
    let mut picked = Vec::with_capacity(count);

    for (index, category) in categories.iter().enumerate() {
        let pool: Vec<usize> = (0..bank.len())
            .filter(|&i| bank[i].category.as_deref() == Some(*category))
            .collect();

        if pool.is_empty() {
            tracing::debug!("No questions in category '{}', leaving it to backfill", category);
            continue;
        }

        let target = per_category + usize::from(index < remainder);
        picked.extend(draw_by_difficulty(bank, &pool, distribution.targets(target), rng));
    }

    backfill(&mut picked, bank.len(), count, rng);

    finish(bank, picked, count, rng)
}

/// Splits `pool` (indices into `bank`) by difficulty and draws each bucket's target.
fn draw_by_difficulty<R: Rng + ?Sized>(
    bank: &[Question],
    pool: &[usize],
    targets: DifficultyTargets,
    rng: &mut R,
) -> Vec<usize> {
    let mut picked = Vec::with_capacity(targets.total());

    for difficulty in Difficulty::ALL {
        let bucket: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&i| bank[i].difficulty == difficulty)
            .collect();

        let target = targets.get(difficulty);
        if bucket.len() < target {
            tracing::debug!(
                "Only {} {} questions for a target of {}",
                bucket.len(),
                difficulty,
                target
            );
        }

        picked.extend(take_random(&bucket, target, rng));
    }

    picked
}

/// Tops `picked` up to `count` with indices not picked yet, or until the bank runs out.
fn backfill<R: Rng + ?Sized>(picked: &mut Vec<usize>, bank_len: usize, count: usize, rng: &mut R) {
    if picked.len() >= count {
        return;
    }

    let mut selected = vec![false; bank_len];
    for &i in picked.iter() {
        selected[i] = true;
    }

    let remaining: Vec<usize> = (0..bank_len).filter(|&i| !selected[i]).collect();
    let needed = count - picked.len();
    picked.extend(take_random(&remaining, needed, rng));
}

fn finish<'a, R: Rng + ?Sized>(
    bank: &'a [Question],
    picked: Vec<usize>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut order = shuffle(&picked, rng);
    // Only reachable when the shares add up to more than 1.0.
    order.truncate(count);
    order.into_iter().map(|i| &bank[i]).collect()
}
