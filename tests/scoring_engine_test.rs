// ABOUTME: Integration tests for per-meal scoring against the built-in catalog
// ABOUTME: Verifies point totals, reason order, advisory flags and disqualification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{avoiding, lean_seafood_answers, neutral_answers};
use mealmd::constants::messages;
use mealmd::constants::scoring::{BASELINE_SCORE, DISQUALIFIED_SCORE};
use mealmd::intelligence::{catalog, MealScorer, Qualification, ScoringWeights};
use mealmd::models::{
    Allergen, AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
    SpicePreference,
};

fn score_of(name: &str, answers: &AnswerSet) -> f64 {
    let meal = catalog::find(name).unwrap();
    MealScorer::with_weights(ScoringWeights::default())
        .score(meal, answers)
        .score
}

#[test]
fn test_lean_seafood_scores_across_catalog() {
    common::init_test_logging();
    let answers = lean_seafood_answers();
    let expected = [
        ("Shrimp Rice Bowl", 74.0),
        ("Egg White Veggie Omelet + Oats", 69.0),
        ("Greek Yogurt Power Bowl", 69.0),
        ("Tofu Stir-Fry", 67.0),
        ("Sardine Avocado Toast", 60.0),
        ("Chickpea Pasta Primavera", 59.0),
        ("Grilled Salmon Bowl", 51.0),
        ("Chicken Thigh + Sweet Potato Plate", 50.0),
        ("Tempeh Buddha Bowl", 50.0),
        ("Lentil Curry + Rice", 43.0),
        ("Turkey Chili (Lean)", 43.0),
        ("Beef Steak Plate", 41.0),
    ];

    for (name, score) in expected {
        assert_eq!(score_of(name, &answers), score, "unexpected score for {name}");
    }
}

#[test]
fn test_reasons_follow_rule_order() {
    let answers = lean_seafood_answers();
    let shrimp = catalog::find("Shrimp Rice Bowl").unwrap();
    let scored = MealScorer::new().score(shrimp, &answers);

    assert_eq!(
        scored.reasons,
        vec![
            messages::MATCHES_FISH_SEAFOOD,
            messages::CUT_FRIENDLY,
            messages::LOW_EFFORT_PREP,
        ]
    );
    assert!(scored.flags.is_empty());
}

#[test]
fn test_post_workout_poultry_takeout() {
    let answers = AnswerSet {
        goal: Goal::Bulk,
        timing: MealTiming::Post,
        protein_pref: ProteinPreference::Poultry,
        avoids: Default::default(),
        effort: EffortPreference::Restaurant,
        sodium_pref: SodiumPreference::Normal,
        spice_pref: SpicePreference::NoPref,
    };
    let chicken = catalog::find("Chicken Thigh + Sweet Potato Plate").unwrap();
    let scored = MealScorer::with_weights(ScoringWeights::default()).score(chicken, &answers);

    // 50 + 8 poultry + 6 protein + 4 carbs + 2 low fat + 5 takeout; 620 kcal misses bulk both ways
    assert_eq!(scored.score, 75.0);
    assert_eq!(
        scored.reasons,
        vec![
            messages::MATCHES_PROTEIN,
            messages::POST_RECOVERY_PROTEIN,
            messages::TAKEOUT_FRIENDLY,
        ]
    );
}

#[test]
fn test_plant_only_penalizes_animal_protein() {
    let answers = AnswerSet {
        protein_pref: ProteinPreference::PlantOnly,
        ..neutral_answers()
    };
    let turkey = catalog::find("Turkey Chili (Lean)").unwrap();
    let scored = MealScorer::with_weights(ScoringWeights::default()).score(turkey, &answers);

    assert_eq!(scored.score, 28.0);
    assert_eq!(
        scored.reasons,
        vec![messages::PREFERS_PLANT_ONLY, messages::MAINTENANCE_FRIENDLY]
    );

    let lentil = catalog::find("Lentil Curry + Rice").unwrap();
    let scored = MealScorer::with_weights(ScoringWeights::default()).score(lentil, &answers);
    assert!(!scored.reasons.contains(&messages::PREFERS_PLANT_ONLY.to_owned()));
}

#[test]
fn test_hard_allergen_disqualifies() {
    let answers = avoiding(neutral_answers(), &[Allergen::Shellfish]);
    let shrimp = catalog::find("Shrimp Rice Bowl").unwrap();
    let scored = MealScorer::new().score(shrimp, &answers);

    assert!(scored.is_disqualified());
    assert_eq!(scored.score, DISQUALIFIED_SCORE);
    assert_eq!(scored.reasons, vec![messages::CONFLICTS_WITH_AVOIDANCES]);
    assert_eq!(scored.flags, vec![messages::CONTAINS_ALLERGEN]);
}

#[test]
fn test_conditional_allergen_only_flags() {
    let answers = avoiding(neutral_answers(), &[Allergen::Dairy, Allergen::Gluten]);

    let steak = catalog::find("Beef Steak Plate").unwrap();
    let scored = MealScorer::new().score(steak, &answers);
    assert_eq!(scored.qualification, Qualification::Qualified);
    assert_eq!(scored.flags, vec![messages::OMIT_BUTTER]);

    let sardine = catalog::find("Sardine Avocado Toast").unwrap();
    let scored = MealScorer::new().score(sardine, &answers);
    assert_eq!(scored.qualification, Qualification::Qualified);
    assert_eq!(scored.flags, vec![messages::GLUTEN_DEPENDS]);
}

#[test]
fn test_fish_avoidance_from_snapshot_disqualifies_sardines() {
    let answers = avoiding(neutral_answers(), &[Allergen::Fish]);

    let sardine = catalog::find("Sardine Avocado Toast").unwrap();
    assert!(MealScorer::new().score(sardine, &answers).is_disqualified());

    // Salmon is not tagged with the fish allergen
    let salmon = catalog::find("Grilled Salmon Bowl").unwrap();
    assert!(!MealScorer::new().score(salmon, &answers).is_disqualified());
}

#[test]
fn test_neutral_answers_stay_near_baseline() {
    let answers = AnswerSet {
        effort: EffortPreference::High,
        ..neutral_answers()
    };
    // Steak: 720 kcal misses maintenance, high effort matches
    assert_eq!(score_of("Beef Steak Plate", &answers), BASELINE_SCORE + 4.0);
    // Quicker meals lose the fixed high-effort mismatch
    assert_eq!(
        score_of("Chickpea Pasta Primavera", &answers),
        BASELINE_SCORE + 5.0 - 2.0
    );
}

#[test]
fn test_sodium_gap_scores_nothing() {
    let answers = AnswerSet {
        sodium_pref: SodiumPreference::Lower,
        ..neutral_answers()
    };
    let turkey = catalog::find("Turkey Chili (Lean)").unwrap();
    let scored = MealScorer::with_weights(ScoringWeights::default()).score(turkey, &answers);

    // 620 mg sits between the bonus ceiling and the penalty floor
    assert!(!scored.reasons.contains(&messages::LOWER_SODIUM.to_owned()));
    assert_eq!(scored.score, 50.0 + 5.0 + 3.0);
}

#[test]
fn test_custom_weights_change_only_their_rule() {
    let answers = lean_seafood_answers();
    let weights = ScoringWeights {
        fish_pref_bonus: 20,
        ..ScoringWeights::default()
    };
    let shrimp = catalog::find("Shrimp Rice Bowl").unwrap();
    let scored = MealScorer::with_weights(weights).score(shrimp, &answers);

    assert_eq!(scored.score, 74.0 + 14.0);
    assert_eq!(scored.reasons.len(), 3);
}

#[test]
fn test_scoring_is_deterministic() {
    let answers = lean_seafood_answers();
    let scorer = MealScorer::new();
    for meal in catalog::meals() {
        assert_eq!(scorer.score(meal, &answers), scorer.score(meal, &answers));
    }
}
