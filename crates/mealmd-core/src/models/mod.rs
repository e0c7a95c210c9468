// ABOUTME: Core data models for the MealMD recommender
// ABOUTME: Re-exports Meal, AnswerSet, allergen tags and the preference enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Meal`: one immutable catalog entry with macros and attributes
//! - `AllergenTag`: an allergen plus whether it is only conditionally present
//! - `AnswerSet`: the user's answers for one recommendation session
//!
//! Every enum carries its wire name (`as_str`) and a lenient parser
//! (`from_str_lossy`) so the preference snapshot and CLI share one spelling.

/// User answer set and preference enums
pub mod answers;
/// Meal catalog entry and attribute enums
pub mod meal;

pub use answers::{
    AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
    SpicePreference,
};
pub use meal::{Allergen, AllergenTag, Macros, Meal, PrepEffort, ProteinType, SpiceLevel};
