// ABOUTME: Per-meal scoring: additive heuristic rules over a meal and an answer set
// ABOUTME: Produces a score with ordered reasons and advisory flags, or a disqualification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal scoring engine
//!
//! Every meal starts at a baseline of 50 and passes through a fixed sequence
//! of independent rules: avoidance filter, protein preference, goal, timing,
//! effort, sodium, spice, advisory flags. Only the avoidance filter
//! short-circuits. Reasons and flags are appended in rule order.

use crate::config::ScoringWeights;
use mealmd_core::constants::{
    messages,
    scoring::{
        BASELINE_SCORE, BULK_LOW_CALORIE_PENALTY, DISQUALIFIED_SCORE,
        HIGH_EFFORT_MISMATCH_PENALTY,
    },
    thresholds,
};
use mealmd_core::models::{
    Allergen, AnswerSet, EffortPreference, Goal, Meal, MealTiming, PrepEffort, ProteinPreference,
    ProteinType, SodiumPreference,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Whether a meal survived the avoidance filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    /// Eligible for ranking
    Qualified,
    /// Carries a hard allergen the user avoids
    Disqualified,
}

/// Result of scoring one meal against one answer set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealScore {
    /// Eligibility
    pub qualification: Qualification,
    /// Additive score; exactly `DISQUALIFIED_SCORE` when disqualified
    pub score: f64,
    /// Human-readable reasons, in rule order
    pub reasons: Vec<String>,
    /// Advisory flags
    pub flags: Vec<String>,
}

impl MealScore {
    fn disqualified() -> Self {
        Self {
            qualification: Qualification::Disqualified,
            score: DISQUALIFIED_SCORE,
            reasons: vec![messages::CONFLICTS_WITH_AVOIDANCES.to_owned()],
            flags: vec![messages::CONTAINS_ALLERGEN.to_owned()],
        }
    }

    /// Whether the meal was excluded by a hard avoidance
    #[must_use]
    pub fn is_disqualified(&self) -> bool {
        self.qualification == Qualification::Disqualified
    }
}

/// Running total for one scoring pass
struct Tally {
    score: f64,
    reasons: Vec<String>,
    flags: Vec<String>,
}

impl Tally {
    const fn new() -> Self {
        Self {
            score: BASELINE_SCORE,
            reasons: Vec::new(),
            flags: Vec::new(),
        }
    }

    fn add(&mut self, points: i32) {
        self.score += f64::from(points);
    }

    fn subtract(&mut self, points: i32) {
        self.score -= f64::from(points);
    }

    fn add_with_reason(&mut self, points: i32, reason: &str) {
        self.add(points);
        self.reasons.push(reason.to_owned());
    }

    fn flag(&mut self, flag: &str) {
        self.flags.push(flag.to_owned());
    }

    fn finish(self) -> MealScore {
        MealScore {
            qualification: Qualification::Qualified,
            score: self.score,
            reasons: self.reasons,
            flags: self.flags,
        }
    }
}

/// Scores meals with a fixed weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealScorer {
    weights: ScoringWeights,
}

impl Default for MealScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MealScorer {
    /// Scorer using the process-wide weight table
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: *ScoringWeights::global(),
        }
    }

    /// Scorer using a caller-supplied weight table
    #[must_use]
    pub const fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score `meal` against `answers`
    #[must_use]
    pub fn score(&self, meal: &Meal, answers: &AnswerSet) -> MealScore {
        if meal.hard_allergens().any(|allergen| answers.is_avoiding(allergen)) {
            trace!(meal = %meal.name, "disqualified by avoidance");
            return MealScore::disqualified();
        }

        let mut tally = Tally::new();
        self.apply_protein_preference(&mut tally, meal, answers.protein_pref);
        self.apply_goal(&mut tally, meal, answers.goal);
        self.apply_timing(&mut tally, meal, answers.timing);
        self.apply_effort(&mut tally, meal, answers.effort);
        self.apply_sodium(&mut tally, meal, answers.sodium_pref);
        if answers.spice_pref.level() == Some(meal.spice) {
            tally.add(self.weights.spice_match_bonus);
        }
        Self::apply_flags(&mut tally, meal);

        let result = tally.finish();
        trace!(meal = %meal.name, score = result.score, reasons = ?result.reasons, "scored meal");
        result
    }

    fn apply_protein_preference(&self, tally: &mut Tally, meal: &Meal, pref: ProteinPreference) {
        let w = &self.weights;
        match pref {
            ProteinPreference::NoPreference => {}
            ProteinPreference::PlantOnly => {
                if meal.protein_type != ProteinType::Plant {
                    tally.subtract(w.plant_only_penalty);
                    tally.reasons.push(messages::PREFERS_PLANT_ONLY.to_owned());
                }
            }
            ProteinPreference::FishSeafood => {
                if meal.protein_type.is_seafood() {
                    tally.add_with_reason(w.fish_pref_bonus, messages::MATCHES_FISH_SEAFOOD);
                } else {
                    tally.subtract(w.mismatch_protein_pref);
                }
            }
            ProteinPreference::Beef | ProteinPreference::Poultry => {
                if pref.exact_type() == Some(meal.protein_type) {
                    tally.add_with_reason(w.match_protein_pref, messages::MATCHES_PROTEIN);
                } else {
                    tally.subtract(w.mismatch_protein_pref);
                }
            }
        }
    }

    fn apply_goal(&self, tally: &mut Tally, meal: &Meal, goal: Goal) {
        let w = &self.weights;
        match goal {
            Goal::Cut => {
                if meal.calories <= thresholds::CUT_MAX_CALORIES
                    && meal.protein_g >= thresholds::CUT_MIN_PROTEIN_G
                {
                    tally.add_with_reason(w.goal_cut, messages::CUT_FRIENDLY);
                }
                if meal.fat_g > thresholds::CUT_MAX_FAT_G {
                    tally.subtract(w.fat_penalty_cut);
                }
            }
            Goal::Bulk => {
                if meal.calories >= thresholds::BULK_MIN_CALORIES
                    && meal.protein_g >= thresholds::BULK_MIN_PROTEIN_G
                {
                    tally.add_with_reason(w.goal_bulk, messages::BULK_FRIENDLY);
                } else if meal.calories < thresholds::BULK_LOW_CALORIES {
                    tally.score -= BULK_LOW_CALORIE_PENALTY;
                }
            }
            Goal::Maintenance => {
                if (thresholds::MAINTENANCE_MIN_CALORIES..=thresholds::MAINTENANCE_MAX_CALORIES)
                    .contains(&meal.calories)
                {
                    tally.add_with_reason(w.goal_maint, messages::MAINTENANCE_FRIENDLY);
                }
            }
        }
    }

    fn apply_timing(&self, tally: &mut Tally, meal: &Meal, timing: MealTiming) {
        let w = &self.weights;
        match timing {
            MealTiming::Pre => {
                if meal.fat_g <= thresholds::WORKOUT_MAX_FAT_G {
                    tally.add_with_reason(w.pre_low_fat, messages::PRE_LIGHTER_FAT);
                } else {
                    tally.subtract(w.pre_low_fat);
                }
                if (thresholds::PRE_MIN_CARBS_G..=thresholds::PRE_MAX_CARBS_G)
                    .contains(&meal.carbs_g)
                {
                    tally.add_with_reason(w.pre_good_carbs, messages::PRE_GOOD_CARBS);
                }
                if (thresholds::PRE_MIN_PROTEIN_G..=thresholds::PRE_MAX_PROTEIN_G)
                    .contains(&meal.protein_g)
                {
                    tally.add(w.pre_mod_protein);
                }
            }
            MealTiming::Post => {
                if meal.protein_g >= thresholds::POST_MIN_PROTEIN_G {
                    tally.add_with_reason(w.post_protein, messages::POST_RECOVERY_PROTEIN);
                }
                if meal.carbs_g >= thresholds::POST_MIN_CARBS_G {
                    tally.add(w.post_carbs);
                }
                if meal.fat_g <= thresholds::WORKOUT_MAX_FAT_G {
                    tally.add(w.post_low_fat);
                }
            }
            MealTiming::Any => {}
        }
    }

    fn apply_effort(&self, tally: &mut Tally, meal: &Meal, effort: EffortPreference) {
        let w = &self.weights;
        match effort {
            EffortPreference::Low => {
                if meal.effort == PrepEffort::Low {
                    tally.add_with_reason(w.effort_low_bonus, messages::LOW_EFFORT_PREP);
                } else {
                    tally.subtract(w.effort_low_penalty);
                }
            }
            EffortPreference::Med => {
                if meal.effort.is_at_most_medium() {
                    tally.add(w.effort_med_bonus);
                }
            }
            EffortPreference::High => {
                if meal.effort == PrepEffort::High {
                    tally.add(w.effort_high_bonus);
                } else {
                    tally.score -= HIGH_EFFORT_MISMATCH_PENALTY;
                }
            }
            EffortPreference::Restaurant => {
                if meal.takeout_ok {
                    tally.add_with_reason(w.effort_restaurant_bonus, messages::TAKEOUT_FRIENDLY);
                } else {
                    tally.subtract(w.effort_restaurant_penalty);
                }
            }
        }
    }

    fn apply_sodium(&self, tally: &mut Tally, meal: &Meal, sodium: SodiumPreference) {
        let w = &self.weights;
        match sodium {
            SodiumPreference::Lower => {
                if meal.sodium_mg <= thresholds::SODIUM_LOW_MAX_MG {
                    tally.add_with_reason(w.sodium_low_bonus, messages::LOWER_SODIUM);
                } else if meal.sodium_mg > thresholds::SODIUM_HIGH_MG {
                    tally.subtract(w.sodium_high_penalty);
                }
            }
            SodiumPreference::Normal => {
                if meal.sodium_mg > thresholds::SODIUM_TOO_HIGH_MG {
                    tally.subtract(w.sodium_too_high_penalty);
                }
            }
        }
    }

    fn apply_flags(tally: &mut Tally, meal: &Meal) {
        if meal.has_conditional(Allergen::Gluten) {
            tally.flag(messages::GLUTEN_DEPENDS);
        }
        if meal.has_conditional(Allergen::Dairy) {
            tally.flag(messages::OMIT_BUTTER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use mealmd_core::models::{SpiceLevel, SpicePreference};
    use std::collections::BTreeSet;

    fn neutral_answers() -> AnswerSet {
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

    fn scorer() -> MealScorer {
        MealScorer::with_weights(ScoringWeights::default())
    }

    #[test]
    fn test_hard_allergen_disqualifies() {
        let mut answers = neutral_answers();
        answers.avoids.insert(Allergen::Shellfish);
        let shrimp = catalog::find("Shrimp Rice Bowl").unwrap();

        let result = scorer().score(shrimp, &answers);
        assert!(result.is_disqualified());
        assert!((result.score - DISQUALIFIED_SCORE).abs() < f64::EPSILON);
        assert_eq!(result.reasons, vec!["conflicts with avoidances"]);
        assert_eq!(result.flags, vec!["contains allergen"]);
    }

    #[test]
    fn test_conditional_allergen_only_flags() {
        let mut answers = neutral_answers();
        answers.avoids.insert(Allergen::Gluten);
        let tofu = catalog::find("Tofu Stir-Fry").unwrap();

        let result = scorer().score(tofu, &answers);
        assert_eq!(result.qualification, Qualification::Qualified);
        assert_eq!(result.flags, vec!["gluten depends on ingredients"]);
    }

    #[test]
    fn test_all_neutral_branches_keep_baseline() {
        let steak = catalog::find("Beef Steak Plate").unwrap();
        let result = scorer().score(steak, &neutral_answers());

        assert!((result.score - BASELINE_SCORE).abs() < f64::EPSILON);
        assert!(result.reasons.is_empty());
        assert_eq!(result.flags, vec!["omit butter to be dairy-free"]);
    }

    #[test]
    fn test_plant_only_penalty() {
        let mut answers = neutral_answers();
        answers.protein_pref = ProteinPreference::PlantOnly;
        answers.goal = Goal::Cut;
        let steak = catalog::find("Beef Steak Plate").unwrap();

        let result = scorer().score(steak, &answers);
        // 50 - 30 (plant-only) - 4 (fat over cut ceiling)
        assert!((result.score - 16.0).abs() < f64::EPSILON);
        assert_eq!(result.reasons, vec!["prefers plant-only"]);
    }

    #[test]
    fn test_bulk_low_calorie_penalty_is_fixed() {
        let mut answers = neutral_answers();
        answers.goal = Goal::Bulk;
        let omelet = catalog::find("Egg White Veggie Omelet + Oats").unwrap();

        let mut weights = ScoringWeights::default();
        weights.goal_bulk = 40;
        let result = MealScorer::with_weights(weights).score(omelet, &answers);
        // 50 - 3 (under 600 kcal) + 3 (med effort accepts low)
        assert!((result.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pre_workout_rules() {
        let mut answers = neutral_answers();
        answers.timing = MealTiming::Pre;
        let sardine = catalog::find("Sardine Avocado Toast").unwrap();

        let result = scorer().score(sardine, &answers);
        // 50 + 5 (maint) - 6 (fat 28) + 4 (carbs 44) + 3 (protein 32) + 3 (low effort ok)
        assert!((result.score - 59.0).abs() < f64::EPSILON);
        assert_eq!(
            result.reasons,
            vec!["maintenance-friendly calories", "pre: good carbs"]
        );
    }

    #[test]
    fn test_lower_sodium_gap_scores_nothing() {
        let mut answers = neutral_answers();
        answers.sodium_pref = SodiumPreference::Lower;
        answers.effort = EffortPreference::Restaurant;
        let turkey = catalog::find("Turkey Chili (Lean)").unwrap();

        let result = scorer().score(turkey, &answers);
        // 50 + 5 (maint) + 5 (takeout); 620 mg sits between the sodium thresholds
        assert!((result.score - 60.0).abs() < f64::EPSILON);
        assert_eq!(
            result.reasons,
            vec!["maintenance-friendly calories", "restaurant/takeout friendly"]
        );
    }

    #[test]
    fn test_spice_match_bonus() {
        let mut answers = neutral_answers();
        answers.spice_pref = SpicePreference::Medium;
        let lentil = catalog::find("Lentil Curry + Rice").unwrap();
        assert_eq!(lentil.spice, SpiceLevel::Medium);

        let result = scorer().score(lentil, &answers);
        // 50 + 5 (maint) + 3 (med effort) + 2 (spice)
        assert!((result.score - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answers = neutral_answers();
        for meal in catalog::meals() {
            assert_eq!(scorer().score(meal, &answers), scorer().score(meal, &answers));
        }
    }
}
