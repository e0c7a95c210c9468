// ABOUTME: Main library entry point for the MealMD meal recommender
// ABOUTME: Wizard, preference snapshot, presenters and configuration around the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealMD`
//!
//! A step-by-step terminal wizard that asks about a meal's goal, timing,
//! protein preference, allergen avoidances, cooking effort, sodium and spice,
//! then scores a fixed catalog of meals and prints the best matches with the
//! reasons behind each score.
//!
//! ## Architecture
//!
//! - **`mealmd-core`**: error types, meal and answer models, scoring constants
//! - **`mealmd-intelligence`**: catalog, weight table, scoring and ranking
//! - **wizard**: collects an `AnswerSet` from any `BufRead`/`Write` pair
//! - **preferences**: the `~/.mealmdrc` snapshot used as wizard defaults
//! - **formatters**: text and JSON rendering of ranked results
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealmd::intelligence::{MealRecommendationEngine, MealRecommender};
//! use mealmd::models::{
//!     AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
//!     SpicePreference,
//! };
//! use std::collections::BTreeSet;
//!
//! let answers = AnswerSet {
//!     goal: Goal::Cut,
//!     timing: MealTiming::Post,
//!     protein_pref: ProteinPreference::Poultry,
//!     avoids: BTreeSet::new(),
//!     effort: EffortPreference::Low,
//!     sodium_pref: SodiumPreference::Normal,
//!     spice_pref: SpicePreference::NoPref,
//! };
//! let response = MealRecommendationEngine::new().recommend(&answers, 3, Some(42));
//! for pick in &response.top_recommendations {
//!     println!("{} ({})", pick.name, pick.score);
//! }
//! ```

/// Environment configuration
pub mod config;

/// Text and JSON rendering of recommendations
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Preference snapshot load/save
pub mod preferences;

/// Interactive answer collection
pub mod wizard;

pub use mealmd_core::{constants, errors, models};
pub use mealmd_intelligence as intelligence;
