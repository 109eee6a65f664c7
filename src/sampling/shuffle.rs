// src/sampling/shuffle.rs

use rand::{Rng, seq::SliceRandom};

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
///
/// `SliceRandom::shuffle` is a Fisher-Yates pass: walking from the last index
/// down to 1, each element is swapped with one picked uniformly from `0..=i`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Draws up to `count` distinct items uniformly: shuffle a copy, keep the prefix.
pub fn take_random<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut drawn = shuffle(items, rng);
    drawn.truncate(count);
    drawn
}
