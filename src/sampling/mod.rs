// src/sampling/mod.rs

pub mod coverage;
pub mod sampler;
pub mod shuffle;

pub use coverage::{ValidationPolicy, ValidationReport, validate};
pub use sampler::{get_balanced_questions, get_random_questions};
pub use shuffle::shuffle;
