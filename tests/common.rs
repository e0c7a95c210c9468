// ABOUTME: Shared test utilities and fixtures for MealMD integration tests
// ABOUTME: Quiet logging setup and answer-set builders for common scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `mealmd`
//!
//! Answer-set builders used across the scoring, ranking and wizard tests.

use mealmd::models::{
    Allergen, AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
    SpicePreference,
};
use std::collections::BTreeSet;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Answers that trigger no goal, timing, protein, sodium or spice rule
pub fn neutral_answers() -> AnswerSet {
    AnswerSet {
        goal: Goal::Maintenance,
        timing: MealTiming::Any,
        protein_pref: ProteinPreference::NoPreference,
        avoids: BTreeSet::new(),
        effort: EffortPreference::Med,
        sodium_pref: SodiumPreference::Normal,
        spice_pref: SpicePreference::NoPref,
    }
}

/// Lean seafood lover: cut, anytime, fish/seafood, low effort, lower sodium, mild
pub fn lean_seafood_answers() -> AnswerSet {
    AnswerSet {
        goal: Goal::Cut,
        timing: MealTiming::Any,
        protein_pref: ProteinPreference::FishSeafood,
        avoids: BTreeSet::new(),
        effort: EffortPreference::Low,
        sodium_pref: SodiumPreference::Lower,
        spice_pref: SpicePreference::Mild,
    }
}

/// `base` with `avoids` replaced
pub fn avoiding(base: AnswerSet, allergens: &[Allergen]) -> AnswerSet {
    AnswerSet {
        avoids: allergens.iter().copied().collect(),
        ..base
    }
}
