// tests/sampler_tests.rs

use std::collections::{HashMap, HashSet};

use quizbank::{
    QuestionBank,
    models::{
        distribution::DifficultyDistribution,
        question::{Difficulty, Question, QuestionId},
    },
    sampling::{get_balanced_questions, get_random_questions},
};
use rand::{SeedableRng, rngs::StdRng};

fn question(id: i64, difficulty: Difficulty, category: Option<&str>) -> Question {
    Question {
        id: QuestionId::Number(id),
        prompt: format!("Question {}", id),
        options: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
        correct_answer: 0,
        explanation: format!("Explanation {}", id),
        section: format!("5.{}.1", id % 7 + 1),
        difficulty,
        topic: "Drawings".to_string(),
        category: category.map(str::to_string),
    }
}

/// Builds a bank with the given number of basic, intermediate and advanced questions.
fn bank(basic: usize, intermediate: usize, advanced: usize) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut id = 0;
    for (difficulty, n) in [
        (Difficulty::Basic, basic),
        (Difficulty::Intermediate, intermediate),
        (Difficulty::Advanced, advanced),
    ] {
        for _ in 0..n {
            id += 1;
            questions.push(question(id, difficulty, None));
        }
    }
    questions
}

fn count_by_difficulty(sample: &[&Question]) -> HashMap<Difficulty, usize> {
    let mut counts = HashMap::new();
    for q in sample {
        *counts.entry(q.difficulty).or_insert(0) += 1;
    }
    counts
}

fn is_subset_without_duplicates(sample: &[&Question], bank: &[Question]) -> bool {
    let addresses: HashSet<*const Question> = sample.iter().map(|q| *q as *const Question).collect();
    let in_bank = sample
        .iter()
        .all(|q| bank.iter().any(|b| std::ptr::eq(*q, b)));
    addresses.len() == sample.len() && in_bank
}

#[test]
fn scenario_all_buckets_supplied_hit_exact_targets() {
    // Arrange: 10 basic, 10 intermediate, 5 advanced
    let bank = bank(10, 10, 5);
    let dist = DifficultyDistribution::new(0.4, 0.45, 0.15);
    let mut rng = StdRng::seed_from_u64(42);

    // Act
    let sample = get_random_questions(&bank, 10, &dist, &mut rng);

    // Assert
    let counts = count_by_difficulty(&sample);
    assert_eq!(sample.len(), 10);
    assert_eq!(counts.get(&Difficulty::Basic), Some(&4));
    assert_eq!(counts.get(&Difficulty::Intermediate), Some(&4));
    assert_eq!(counts.get(&Difficulty::Advanced), Some(&2));
    assert!(is_subset_without_duplicates(&sample, &bank));
}

#[test]
fn scenario_short_advanced_bucket_is_backfilled() {
    // Advanced target is round(10 * 0.5) = 5 but only 2 exist
    let bank = bank(10, 10, 2);
    let dist = DifficultyDistribution::new(0.3, 0.2, 0.5);
    let mut rng = StdRng::seed_from_u64(7);

    let sample = get_random_questions(&bank, 10, &dist, &mut rng);

    let counts = count_by_difficulty(&sample);
    assert_eq!(sample.len(), 10);
    assert_eq!(counts.get(&Difficulty::Advanced), Some(&2));
    assert_eq!(
        counts.get(&Difficulty::Basic).unwrap_or(&0) + counts.get(&Difficulty::Intermediate).unwrap_or(&0),
        8
    );
    assert!(is_subset_without_duplicates(&sample, &bank));
}

#[test]
fn scenario_zero_count_is_empty() {
    let bank = bank(5, 5, 5);
    let mut rng = StdRng::seed_from_u64(1);

    for dist in [
        DifficultyDistribution::default(),
        DifficultyDistribution::new(1.0, 0.0, 0.0),
        DifficultyDistribution::new(3.0, -1.0, 2.0),
    ] {
        assert!(get_random_questions(&bank, 0, &dist, &mut rng).is_empty());
    }
}

#[test]
fn scenario_empty_bank_is_empty() {
    let bank: Vec<Question> = Vec::new();
    let mut rng = StdRng::seed_from_u64(1);

    for count in [1, 10, 50] {
        assert!(get_random_questions(&bank, count, &DifficultyDistribution::default(), &mut rng).is_empty());
    }
}

#[test]
fn length_is_min_of_count_and_bank_size() {
    let mut rng = StdRng::seed_from_u64(99);
    let shapes = [(0, 0, 3), (1, 2, 3), (10, 0, 0), (4, 9, 1), (12, 12, 12)];
    let dists = [
        DifficultyDistribution::default(),
        DifficultyDistribution::new(0.35, 0.45, 0.2),
        DifficultyDistribution::new(0.0, 0.0, 1.0),
        DifficultyDistribution::new(0.9, 0.9, 0.9),
        DifficultyDistribution::new(0.1, 0.1, 0.1),
        DifficultyDistribution::new(1e30, 0.0, 0.0),
        DifficultyDistribution::new(f64::INFINITY, 0.0, f64::INFINITY),
        DifficultyDistribution::new(1e9, 1e9, 1e9),
    ];

    for (b, i, a) in shapes {
        let bank = bank(b, i, a);
        for dist in &dists {
            for count in [0, 1, 5, 13, 36, 100] {
                let sample = get_random_questions(&bank, count, dist, &mut rng);
                assert_eq!(sample.len(), count.min(bank.len()), "bank {:?}, count {}", (b, i, a), count);
                assert!(is_subset_without_duplicates(&sample, &bank));
            }
        }
    }
}

#[test]
fn targets_are_exact_when_supply_is_enough() {
    let bank = bank(30, 30, 30);
    let mut rng = StdRng::seed_from_u64(2024);

    for (dist, count) in [
        (DifficultyDistribution::new(0.35, 0.45, 0.2), 28),
        (DifficultyDistribution::new(0.3, 0.5, 0.2), 21),
        (DifficultyDistribution::new(0.4, 0.45, 0.15), 30),
    ] {
        let targets = dist.targets(count);
        let counts = count_by_difficulty(&get_random_questions(&bank, count, &dist, &mut rng));
        for d in Difficulty::ALL {
            assert_eq!(counts.get(&d).copied().unwrap_or(0), targets.get(d), "{} for {:?}", d, dist);
        }
    }
}

#[test]
fn bank_is_not_mutated() {
    let bank = bank(6, 6, 6);
    let snapshot = bank.clone();
    let mut rng = StdRng::seed_from_u64(5);

    let _ = get_random_questions(&bank, 12, &DifficultyDistribution::default(), &mut rng);
    let _ = get_balanced_questions(&bank, 12, &["A", "B"], &DifficultyDistribution::default(), &mut rng);

    assert_eq!(bank, snapshot);
}

#[test]
fn output_is_not_grouped_by_difficulty() {
    // With 12 of each difficulty, a sample of 12 sorted by difficulty would
    // come out in that order every time. Over 50 seeds at least one must not.
    let bank = bank(12, 12, 12);
    let dist = DifficultyDistribution::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);

    let ungrouped = (0..50).any(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = get_random_questions(&bank, 12, &dist, &mut rng);
        sample.windows(2).any(|w| w[0].difficulty > w[1].difficulty)
    });

    assert!(ungrouped);
}

#[test]
fn same_seed_gives_same_paper() {
    let bank = bank(10, 10, 10);
    let dist = DifficultyDistribution::default();

    let first: Vec<&QuestionId> = get_random_questions(&bank, 15, &dist, &mut StdRng::seed_from_u64(11))
        .into_iter()
        .map(|q| &q.id)
        .collect();
    let second: Vec<&QuestionId> = get_random_questions(&bank, 15, &dist, &mut StdRng::seed_from_u64(11))
        .into_iter()
        .map(|q| &q.id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn balanced_spreads_across_categories() {
    let categories = ["Health & Safety", "Safe Isolation", "Fault Finding"];
    let mut questions = Vec::new();
    let mut id = 0;
    for category in categories {
        for difficulty in Difficulty::ALL {
            for _ in 0..5 {
                id += 1;
                questions.push(question(id, difficulty, Some(category)));
            }
        }
    }
    let mut rng = StdRng::seed_from_u64(3);

    // 10 over 3 categories: 4, 3, 3
    let sample = get_balanced_questions(
        &questions,
        10,
        &categories,
        &DifficultyDistribution::new(0.3, 0.5, 0.2),
        &mut rng,
    );

    let mut per_category: HashMap<&str, usize> = HashMap::new();
    for q in &sample {
        *per_category.entry(q.category.as_deref().unwrap()).or_insert(0) += 1;
    }
    assert_eq!(sample.len(), 10);
    assert_eq!(per_category.get("Health & Safety"), Some(&4));
    assert_eq!(per_category.get("Safe Isolation"), Some(&3));
    assert_eq!(per_category.get("Fault Finding"), Some(&3));
    assert!(is_subset_without_duplicates(&sample, &questions));
}

#[test]
fn balanced_backfills_missing_category() {
    let mut questions: Vec<Question> = (1..=6)
        .map(|i| question(i, Difficulty::Basic, Some("Safe Isolation")))
        .collect();
    questions.push(question(7, Difficulty::Advanced, None));
    let mut rng = StdRng::seed_from_u64(8);

    let sample = get_balanced_questions(
        &questions,
        6,
        &["Safe Isolation", "Building Regulations"],
        &DifficultyDistribution::default(),
        &mut rng,
    );

    assert_eq!(sample.len(), 6);
    assert!(is_subset_without_duplicates(&sample, &questions));
}

#[test]
fn balanced_without_categories_matches_plain_sampler_length() {
    let questions = bank(3, 3, 3);
    let mut rng = StdRng::seed_from_u64(8);
    let no_categories: [&str; 0] = [];

    let sample = get_balanced_questions(&questions, 20, &no_categories, &DifficultyDistribution::default(), &mut rng);
    assert_eq!(sample.len(), 9);
}

#[test]
fn question_bank_methods_delegate_to_sampler() {
    let bank = QuestionBank::new("m5", "Module 5", bank(10, 10, 5));
    let mut rng = StdRng::seed_from_u64(42);

    let sample = bank.random_questions(10, &DifficultyDistribution::new(0.4, 0.45, 0.15), &mut rng);
    assert_eq!(sample.len(), 10);

    let exam = bank.exam_questions(40, &mut rng);
    assert_eq!(exam.len(), 25);

    assert_eq!(bank.by_difficulty(Difficulty::Advanced).len(), 5);
    assert_eq!(bank.by_section_prefix("5.1").len(), bank.by_section("5.1.1").len());
    assert_eq!(bank.by_topic("drawings").len(), 25);
    assert!(bank.by_category("Fault Finding").is_empty());
}
