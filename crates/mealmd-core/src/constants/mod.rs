// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring thresholds, reason and flag messages, and CLI defaults for MealMD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Tunable point values live in the weight table
//! (`mealmd_intelligence::config::ScoringWeights`); this module holds the
//! fixed nutritional thresholds those weights are attached to, the
//! human-readable strings the scoring rules emit, and process defaults.

/// Score bookkeeping for the scoring engine and recommender
pub mod scoring {
    /// Every meal starts from this score before any rule applies
    pub const BASELINE_SCORE: f64 = 50.0;
    /// Score reported for a meal that conflicts with a hard avoidance
    pub const DISQUALIFIED_SCORE: f64 = -999.0;
    /// Meals at or below this score never reach the ranking step
    pub const MIN_QUALIFYING_SCORE: f64 = -500.0;
    /// Fixed deduction when bulking on a meal under the bulk calorie floor
    pub const BULK_LOW_CALORIE_PENALTY: f64 = 3.0;
    /// Fixed deduction when a high-effort cook gets a quicker meal
    pub const HIGH_EFFORT_MISMATCH_PENALTY: f64 = 2.0;
}

/// Nutritional thresholds the scoring rules compare against
pub mod thresholds {
    /// Cutting: calorie ceiling for the cut bonus (inclusive)
    pub const CUT_MAX_CALORIES: u32 = 600;
    /// Cutting: protein floor for the cut bonus (inclusive, grams)
    pub const CUT_MIN_PROTEIN_G: u32 = 35;
    /// Cutting: fat above this draws the fat penalty (grams)
    pub const CUT_MAX_FAT_G: u32 = 22;

    /// Bulking: calorie floor for the bulk bonus (inclusive)
    pub const BULK_MIN_CALORIES: u32 = 650;
    /// Bulking: protein floor for the bulk bonus (inclusive, grams)
    pub const BULK_MIN_PROTEIN_G: u32 = 40;
    /// Bulking: meals under this draw the fixed low-calorie penalty
    pub const BULK_LOW_CALORIES: u32 = 600;

    /// Maintenance calorie window, inclusive on both ends
    pub const MAINTENANCE_MIN_CALORIES: u32 = 500;
    /// Upper end of the maintenance window
    pub const MAINTENANCE_MAX_CALORIES: u32 = 700;

    /// Pre/post workout: "lighter fat" ceiling (inclusive, grams)
    pub const WORKOUT_MAX_FAT_G: u32 = 20;
    /// Pre-workout carbohydrate window, inclusive (grams)
    pub const PRE_MIN_CARBS_G: u32 = 40;
    /// Upper end of the pre-workout carbohydrate window
    pub const PRE_MAX_CARBS_G: u32 = 90;
    /// Pre-workout moderate protein window, inclusive (grams)
    pub const PRE_MIN_PROTEIN_G: u32 = 25;
    /// Upper end of the pre-workout protein window
    pub const PRE_MAX_PROTEIN_G: u32 = 40;
    /// Post-workout protein floor (inclusive, grams)
    pub const POST_MIN_PROTEIN_G: u32 = 35;
    /// Post-workout carbohydrate floor (inclusive, grams)
    pub const POST_MIN_CARBS_G: u32 = 50;

    /// Lower-sodium preference: bonus at or under this (mg)
    pub const SODIUM_LOW_MAX_MG: u32 = 500;
    /// Lower-sodium preference: penalty above this (mg); the gap up to here scores nothing
    pub const SODIUM_HIGH_MG: u32 = 700;
    /// Normal sodium preference: penalty above this (mg)
    pub const SODIUM_TOO_HIGH_MG: u32 = 850;
}

/// Human-readable reason and flag strings emitted by scoring
pub mod messages {
    /// Reason for a disqualified meal
    pub const CONFLICTS_WITH_AVOIDANCES: &str = "conflicts with avoidances";
    /// Flag for a disqualified meal
    pub const CONTAINS_ALLERGEN: &str = "contains allergen";

    /// Plant-only preference against an animal-protein meal
    pub const PREFERS_PLANT_ONLY: &str = "prefers plant-only";
    /// Fish/seafood preference satisfied
    pub const MATCHES_FISH_SEAFOOD: &str = "matches fish/seafood preference";
    /// Beef/poultry preference satisfied
    pub const MATCHES_PROTEIN: &str = "matches protein preference";

    /// Cut goal satisfied
    pub const CUT_FRIENDLY: &str = "cut: high protein, moderate calories";
    /// Bulk goal satisfied
    pub const BULK_FRIENDLY: &str = "bulk: higher cals & protein";
    /// Maintenance goal satisfied
    pub const MAINTENANCE_FRIENDLY: &str = "maintenance-friendly calories";

    /// Pre-workout fat ceiling satisfied
    pub const PRE_LIGHTER_FAT: &str = "pre: lighter fat";
    /// Pre-workout carbohydrate window satisfied
    pub const PRE_GOOD_CARBS: &str = "pre: good carbs";
    /// Post-workout protein floor satisfied
    pub const POST_RECOVERY_PROTEIN: &str = "post: protein for recovery";

    /// Low-effort preference satisfied
    pub const LOW_EFFORT_PREP: &str = "low effort prep";
    /// Restaurant preference satisfied
    pub const TAKEOUT_FRIENDLY: &str = "restaurant/takeout friendly";

    /// Lower-sodium preference satisfied
    pub const LOWER_SODIUM: &str = "lower sodium";

    /// Advisory flag for conditional gluten
    pub const GLUTEN_DEPENDS: &str = "gluten depends on ingredients";
    /// Advisory flag for conditional dairy
    pub const OMIT_BUTTER: &str = "omit butter to be dairy-free";

    /// Explanation when no meal survives filtering
    pub const NO_MEALS_FIT: &str =
        "No meals fit all choices. Try relaxing one avoidance or picking 'No preference'.";
    /// Explanation attached to a non-empty recommendation list
    pub const DEFAULT_EXPLANATION: &str = "Simple terminal helper for meal ideas.";
    /// Closing line of text output
    pub const DISCLAIMER: &str = "Just a simple helper for meal ideas — not medical advice.";
}

/// Process-level defaults
pub mod defaults {
    /// Number of recommendations shown when `--top` is not given
    pub const TOP_K: usize = 3;
    /// File name of the preference snapshot inside the home directory
    pub const PREFS_FILE_NAME: &str = ".mealmdrc";
    /// Default log level for the CLI
    pub const LOG_LEVEL: &str = "warn";
}

/// Environment variable names read by configuration
pub mod env_config {
    /// Overrides the preference snapshot location
    pub const PREFS_PATH: &str = "MEALMD_PREFS_PATH";
    /// Overrides the default number of recommendations
    pub const TOP_K: &str = "MEALMD_TOP_K";
    /// Disables ANSI styling when set (<https://no-color.org>)
    pub const NO_COLOR: &str = "NO_COLOR";
    /// Prefix for per-weight overrides, e.g. `MEALMD_WEIGHT_GOAL_CUT`
    pub const WEIGHT_PREFIX: &str = "MEALMD_WEIGHT_";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Service identification for structured logging
pub mod service_names {
    /// Binary/service name
    pub const MEALMD: &str = "mealmd";
}
