// ABOUTME: Meal intelligence crate: catalog, weight table, scoring and ranking
// ABOUTME: Pure and synchronous; no I/O beyond reading weight overrides from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealMD` Intelligence
//!
//! Data flow: `AnswerSet` → [`MealRecommendationEngine`] →
//! ([`MealScorer`] × [`catalog::meals`]) → [`RecommendationResponse`].
//!
//! The scorer is a fixed, ordered list of additive rules driven by
//! [`ScoringWeights`]. The recommender filters disqualified meals, optionally
//! shuffles survivors with a seeded `ChaCha8Rng` so equal scores break ties
//! reproducibly, then sorts and truncates.

/// Built-in meal catalog
pub mod catalog;
/// Weight table and configuration errors
pub mod config;
/// Catalog-wide ranking
pub mod recommendation_engine;
/// Per-meal scoring rules
pub mod scoring_engine;

pub use config::{ConfigError, ScoringWeights};
pub use recommendation_engine::{
    MealRecommendationEngine, MealRecommender, Recommendation, RecommendationResponse,
};
pub use scoring_engine::{MealScore, MealScorer, Qualification};
