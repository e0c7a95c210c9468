// ABOUTME: Meal recommendation engine ranking the whole catalog for one answer set
// ABOUTME: Filters disqualified meals, breaks ties with a seeded shuffle, sorts and truncates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Meal recommendation engine

use crate::catalog;
use crate::config::ScoringWeights;
use crate::scoring_engine::{MealScore, MealScorer, Qualification};
use mealmd_core::constants::{messages, scoring::MIN_QUALIFYING_SCORE};
use mealmd_core::models::{AnswerSet, Macros, Meal};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// One ranked meal, packaged for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Meal name
    pub name: String,
    /// Ingredient lines
    pub items: Vec<String>,
    /// Calories and macronutrients
    pub macros: Macros,
    /// Sodium (mg)
    pub sodium_mg: u32,
    /// Score rounded to one decimal
    pub score: f64,
    /// Why the meal ranked where it did
    pub reasons: Vec<String>,
    /// Advisory notes
    pub flags: Vec<String>,
}

impl Recommendation {
    fn from_scored(meal: &Meal, scored: MealScore) -> Self {
        Self {
            name: meal.name.clone(),
            items: meal.items.clone(),
            macros: meal.macros(),
            sodium_mg: meal.sodium_mg,
            score: round_to_tenth(scored.score),
            reasons: scored.reasons,
            flags: scored.flags,
        }
    }
}

/// Ranked recommendations with an explanation line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Best meals first, at most `top_k`
    pub top_recommendations: Vec<Recommendation>,
    /// Fixed explanation; suggests relaxing choices when nothing qualifies
    pub explanation: String,
}

/// Trait for ranking meals against an answer set
pub trait MealRecommender {
    /// Rank qualifying meals and return the best `top_k`
    ///
    /// A `seed` makes the order of equal-score meals reproducible; without one,
    /// ties keep catalog order.
    fn recommend(
        &self,
        answers: &AnswerSet,
        top_k: usize,
        seed: Option<u64>,
    ) -> RecommendationResponse;
}

/// Recommendation engine over a borrowed catalog
#[derive(Debug, Clone)]
pub struct MealRecommendationEngine<'a> {
    catalog: &'a [Meal],
    scorer: MealScorer,
}

impl Default for MealRecommendationEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl MealRecommendationEngine<'static> {
    /// Engine over the built-in catalog with the global weight table
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: catalog::meals(),
            scorer: MealScorer::new(),
        }
    }
}

impl<'a> MealRecommendationEngine<'a> {
    /// Engine over a caller-supplied catalog with the global weight table
    #[must_use]
    pub fn with_catalog(catalog: &'a [Meal]) -> Self {
        Self {
            catalog,
            scorer: MealScorer::new(),
        }
    }

    /// Replace the weight table
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.scorer = MealScorer::with_weights(weights);
        self
    }

    fn qualifying(&self, answers: &AnswerSet) -> Vec<(&'a Meal, MealScore)> {
        self.catalog
            .iter()
            .map(|meal| (meal, self.scorer.score(meal, answers)))
            .filter(|(_, scored)| {
                scored.qualification == Qualification::Qualified
                    && scored.score > MIN_QUALIFYING_SCORE
            })
            .collect()
    }
}

impl MealRecommender for MealRecommendationEngine<'_> {
    fn recommend(
        &self,
        answers: &AnswerSet,
        top_k: usize,
        seed: Option<u64>,
    ) -> RecommendationResponse {
        let mut ranked = self.qualifying(answers);
        debug!(
            catalog = self.catalog.len(),
            qualifying = ranked.len(),
            top_k,
            ?seed,
            "ranking meals"
        );

        if ranked.is_empty() {
            return RecommendationResponse {
                top_recommendations: Vec::new(),
                explanation: messages::NO_MEALS_FIT.to_owned(),
            };
        }

        if let Some(seed) = seed {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            ranked.shuffle(&mut rng);
        }

        // sort_by is stable: equal scores keep shuffled (or catalog) order
        ranked.sort_by(|(_, a), (_, b)| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        RecommendationResponse {
            top_recommendations: ranked
                .into_iter()
                .map(|(meal, scored)| Recommendation::from_scored(meal, scored))
                .collect(),
            explanation: messages::DEFAULT_EXPLANATION.to_owned(),
        }
    }
}

fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
