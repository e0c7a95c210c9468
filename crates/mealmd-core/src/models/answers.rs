// ABOUTME: Answer set model capturing one session of user preferences
// ABOUTME: Goal, MealTiming, ProteinPreference, EffortPreference, SodiumPreference, SpicePreference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::{Allergen, ProteinType, SpiceLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose fat: high protein, moderate calories
    Cut,
    /// Hold weight
    Maintenance,
    /// Gain: higher calories and protein
    Bulk,
}

impl Goal {
    /// All variants in prompt order
    pub const ALL: [Self; 3] = [Self::Cut, Self::Maintenance, Self::Bulk];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Maintenance => "maintenance",
            Self::Bulk => "bulk",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Some(Self::Cut),
            "maintenance" => Some(Self::Maintenance),
            "bulk" => Some(Self::Bulk),
            _ => None,
        }
    }
}

/// When the meal is eaten relative to a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTiming {
    /// 0-2h before training
    Pre,
    /// 0-2h after training
    Post,
    /// Not tied to a workout
    Any,
}

impl MealTiming {
    /// All variants in prompt order
    pub const ALL: [Self; 3] = [Self::Pre, Self::Post, Self::Any];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Any => "any",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pre" => Some(Self::Pre),
            "post" => Some(Self::Post),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

/// Preferred protein source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinPreference {
    /// Beef/red meat
    #[serde(rename = "beef")]
    Beef,
    /// Chicken/turkey
    #[serde(rename = "poultry")]
    Poultry,
    /// Any fish or shellfish
    #[serde(rename = "fish/seafood")]
    FishSeafood,
    /// Plant protein only
    #[serde(rename = "plant-only")]
    PlantOnly,
    /// Anything goes
    #[serde(rename = "no-preference")]
    NoPreference,
}

impl ProteinPreference {
    /// All variants in prompt order
    pub const ALL: [Self; 5] = [
        Self::Beef,
        Self::Poultry,
        Self::FishSeafood,
        Self::PlantOnly,
        Self::NoPreference,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beef => "beef",
            Self::Poultry => "poultry",
            Self::FishSeafood => "fish/seafood",
            Self::PlantOnly => "plant-only",
            Self::NoPreference => "no-preference",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beef" => Some(Self::Beef),
            "poultry" => Some(Self::Poultry),
            "fish/seafood" => Some(Self::FishSeafood),
            "plant-only" => Some(Self::PlantOnly),
            "no-preference" => Some(Self::NoPreference),
            _ => None,
        }
    }

    /// The single protein type this preference matches exactly, if any
    #[must_use]
    pub const fn exact_type(&self) -> Option<ProteinType> {
        match self {
            Self::Beef => Some(ProteinType::Beef),
            Self::Poultry => Some(ProteinType::Poultry),
            Self::FishSeafood | Self::PlantOnly | Self::NoPreference => None,
        }
    }
}

/// How much cooking the user is willing to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortPreference {
    /// Under 15 minutes
    Low,
    /// 15 to 30 minutes
    Med,
    /// Over 30 minutes
    High,
    /// Ordering out is fine
    Restaurant,
}

impl EffortPreference {
    /// All variants in prompt order
    pub const ALL: [Self; 4] = [Self::Low, Self::Med, Self::High, Self::Restaurant];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
            Self::Restaurant => "restaurant",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "med" => Some(Self::Med),
            "high" => Some(Self::High),
            "restaurant" => Some(Self::Restaurant),
            _ => None,
        }
    }
}

/// Sodium sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SodiumPreference {
    /// Only penalize very salty meals
    Normal,
    /// Reward low-sodium meals
    Lower,
}

impl SodiumPreference {
    /// All variants in prompt order
    pub const ALL: [Self; 2] = [Self::Normal, Self::Lower];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Lower => "lower",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "lower" => Some(Self::Lower),
            _ => None,
        }
    }
}

/// Preferred heat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpicePreference {
    /// Mild
    #[serde(rename = "mild")]
    Mild,
    /// Medium
    #[serde(rename = "medium")]
    Medium,
    /// Spicy
    #[serde(rename = "spicy")]
    Spicy,
    /// No preference
    #[serde(rename = "no-pref")]
    NoPref,
}

impl SpicePreference {
    /// All variants in prompt order
    pub const ALL: [Self; 4] = [Self::Mild, Self::Medium, Self::Spicy, Self::NoPref];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Spicy => "spicy",
            Self::NoPref => "no-pref",
        }
    }

    /// Parse from a wire name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "medium" => Some(Self::Medium),
            "spicy" => Some(Self::Spicy),
            "no-pref" => Some(Self::NoPref),
            _ => None,
        }
    }

    /// The spice level this preference asks for, if specific
    #[must_use]
    pub const fn level(&self) -> Option<SpiceLevel> {
        match self {
            Self::Mild => Some(SpiceLevel::Mild),
            Self::Medium => Some(SpiceLevel::Medium),
            Self::Spicy => Some(SpiceLevel::Spicy),
            Self::NoPref => None,
        }
    }
}

/// One session's answers, immutable once handed to the recommender
///
/// Serializes to the preference snapshot schema: every field at top level,
/// `avoids` as a list of lowercase allergen names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Body composition goal
    pub goal: Goal,
    /// Meal timing relative to training
    pub timing: MealTiming,
    /// Protein preference
    pub protein_pref: ProteinPreference,
    /// Allergens to avoid entirely
    pub avoids: BTreeSet<Allergen>,
    /// Cooking effort
    pub effort: EffortPreference,
    /// Sodium sensitivity
    pub sodium_pref: SodiumPreference,
    /// Heat preference
    pub spice_pref: SpicePreference,
}

impl AnswerSet {
    /// Whether `allergen` is on the avoid list
    #[must_use]
    pub fn is_avoiding(&self, allergen: Allergen) -> bool {
        self.avoids.contains(&allergen)
    }
}
