// ABOUTME: Scoring weight table: one named point value per scoring factor
// ABOUTME: Defaults, environment overrides, validation, and the process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Weight Table
//!
//! Every point value the scoring engine adds or subtracts comes from a named
//! field here, so a ranking can always be explained by pointing at the table.
//! Weights are magnitudes: each rule decides whether its weight is a bonus or
//! a penalty, so every field must be non-negative.
//!
//! Any field can be overridden with `MEALMD_WEIGHT_<FIELD>` (upper-cased field
//! name), e.g. `MEALMD_WEIGHT_GOAL_CUT=12`.

use super::error::ConfigError;
use mealmd_core::constants::env_config::WEIGHT_PREFIX;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

/// Global weight table
static SCORING_WEIGHTS: OnceLock<ScoringWeights> = OnceLock::new();

/// Number of named weights
const WEIGHT_COUNT: usize = 24;

/// Named point values for every scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Beef/poultry preference matched exactly
    pub match_protein_pref: i32,
    /// Protein preference not matched
    pub mismatch_protein_pref: i32,
    /// Plant-only preference against an animal-protein meal
    pub plant_only_penalty: i32,
    /// Fish/seafood preference matched
    pub fish_pref_bonus: i32,

    /// Cut goal satisfied
    pub goal_cut: i32,
    /// Bulk goal satisfied
    pub goal_bulk: i32,
    /// Maintenance goal satisfied
    pub goal_maint: i32,
    /// Cutting on a high-fat meal
    pub fat_penalty_cut: i32,

    /// Pre-workout fat check (bonus when light, penalty otherwise)
    pub pre_low_fat: i32,
    /// Pre-workout carbohydrate window
    pub pre_good_carbs: i32,
    /// Pre-workout moderate protein window
    pub pre_mod_protein: i32,

    /// Post-workout protein floor
    pub post_protein: i32,
    /// Post-workout carbohydrate floor
    pub post_carbs: i32,
    /// Post-workout fat ceiling
    pub post_low_fat: i32,

    /// Low-effort preference met
    pub effort_low_bonus: i32,
    /// Low-effort preference missed
    pub effort_low_penalty: i32,
    /// Medium-effort preference met
    pub effort_med_bonus: i32,
    /// High-effort preference met
    pub effort_high_bonus: i32,
    /// Restaurant preference met
    pub effort_restaurant_bonus: i32,
    /// Restaurant preference missed
    pub effort_restaurant_penalty: i32,

    /// Lower-sodium preference met
    pub sodium_low_bonus: i32,
    /// Lower-sodium preference on a salty meal
    pub sodium_high_penalty: i32,
    /// Normal sodium preference on a very salty meal
    pub sodium_too_high_penalty: i32,

    /// Specific spice preference matched
    pub spice_match_bonus: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            match_protein_pref: 8,
            mismatch_protein_pref: 4,
            plant_only_penalty: 30,
            fish_pref_bonus: 6,

            goal_cut: 10,
            goal_bulk: 10,
            goal_maint: 5,
            fat_penalty_cut: 4,

            pre_low_fat: 6,
            pre_good_carbs: 4,
            pre_mod_protein: 3,

            post_protein: 6,
            post_carbs: 4,
            post_low_fat: 2,

            effort_low_bonus: 6,
            effort_low_penalty: 3,
            effort_med_bonus: 3,
            effort_high_bonus: 4,
            effort_restaurant_bonus: 5,
            effort_restaurant_penalty: 4,

            sodium_low_bonus: 5,
            sodium_high_penalty: 6,
            sodium_too_high_penalty: 2,

            spice_match_bonus: 2,
        }
    }
}

impl ScoringWeights {
    /// Get the global weight table
    ///
    /// Loaded once from the environment; invalid overrides fall back to the
    /// defaults with a warning.
    pub fn global() -> &'static Self {
        SCORING_WEIGHTS.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring weights: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load the weight table from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not an integer or a weight is negative
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from `lookup`, keyed by `MEALMD_WEIGHT_<FIELD>`, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not an integer or a weight is negative
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, target) in self.named_mut() {
            let var_name = format!("{WEIGHT_PREFIX}{}", name.to_uppercase());
            if let Some(raw) = lookup(&var_name) {
                *target = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {var_name}: {raw:?}")))?;
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that every weight is a non-negative magnitude
    ///
    /// # Errors
    ///
    /// Returns an error naming the first negative weight
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.named().into_iter().find(|(_, value)| *value < 0) {
            Some((name, value)) => Err(ConfigError::InvalidWeights(format!(
                "{name} must be >= 0, got {value}"
            ))),
            None => Ok(()),
        }
    }

    /// Every weight with its field name, in table order
    #[must_use]
    pub const fn named(&self) -> [(&'static str, i32); WEIGHT_COUNT] {
        [
            ("match_protein_pref", self.match_protein_pref),
            ("mismatch_protein_pref", self.mismatch_protein_pref),
            ("plant_only_penalty", self.plant_only_penalty),
            ("fish_pref_bonus", self.fish_pref_bonus),
            ("goal_cut", self.goal_cut),
            ("goal_bulk", self.goal_bulk),
            ("goal_maint", self.goal_maint),
            ("fat_penalty_cut", self.fat_penalty_cut),
            ("pre_low_fat", self.pre_low_fat),
            ("pre_good_carbs", self.pre_good_carbs),
            ("pre_mod_protein", self.pre_mod_protein),
            ("post_protein", self.post_protein),
            ("post_carbs", self.post_carbs),
            ("post_low_fat", self.post_low_fat),
            ("effort_low_bonus", self.effort_low_bonus),
            ("effort_low_penalty", self.effort_low_penalty),
            ("effort_med_bonus", self.effort_med_bonus),
            ("effort_high_bonus", self.effort_high_bonus),
            ("effort_restaurant_bonus", self.effort_restaurant_bonus),
            ("effort_restaurant_penalty", self.effort_restaurant_penalty),
            ("sodium_low_bonus", self.sodium_low_bonus),
            ("sodium_high_penalty", self.sodium_high_penalty),
            ("sodium_too_high_penalty", self.sodium_too_high_penalty),
            ("spice_match_bonus", self.spice_match_bonus),
        ]
    }

    fn named_mut(&mut self) -> [(&'static str, &mut i32); WEIGHT_COUNT] {
        [
            ("match_protein_pref", &mut self.match_protein_pref),
            ("mismatch_protein_pref", &mut self.mismatch_protein_pref),
            ("plant_only_penalty", &mut self.plant_only_penalty),
            ("fish_pref_bonus", &mut self.fish_pref_bonus),
            ("goal_cut", &mut self.goal_cut),
            ("goal_bulk", &mut self.goal_bulk),
            ("goal_maint", &mut self.goal_maint),
            ("fat_penalty_cut", &mut self.fat_penalty_cut),
            ("pre_low_fat", &mut self.pre_low_fat),
            ("pre_good_carbs", &mut self.pre_good_carbs),
            ("pre_mod_protein", &mut self.pre_mod_protein),
            ("post_protein", &mut self.post_protein),
            ("post_carbs", &mut self.post_carbs),
            ("post_low_fat", &mut self.post_low_fat),
            ("effort_low_bonus", &mut self.effort_low_bonus),
            ("effort_low_penalty", &mut self.effort_low_penalty),
            ("effort_med_bonus", &mut self.effort_med_bonus),
            ("effort_high_bonus", &mut self.effort_high_bonus),
            ("effort_restaurant_bonus", &mut self.effort_restaurant_bonus),
            ("effort_restaurant_penalty", &mut self.effort_restaurant_penalty),
            ("sodium_low_bonus", &mut self.sodium_low_bonus),
            ("sodium_high_penalty", &mut self.sodium_high_penalty),
            ("sodium_too_high_penalty", &mut self.sodium_too_high_penalty),
            ("spice_match_bonus", &mut self.spice_match_bonus),
        ]
    }
}
