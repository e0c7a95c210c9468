// ABOUTME: Meal catalog entry model with macros, allergen tags and prep attributes
// ABOUTME: Meal, AllergenTag, Allergen, ProteinType, PrepEffort and SpiceLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Allergen that a meal can carry and a user can avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    /// Milk products
    Dairy,
    /// Wheat, barley, rye
    Gluten,
    /// Tree nuts
    Nuts,
    /// Eggs
    Eggs,
    /// Soy products
    Soy,
    /// Crustaceans and mollusks
    Shellfish,
    /// Sesame seeds and tahini
    Sesame,
    /// Finfish
    Fish,
}

impl Allergen {
    /// Allergens offered by the avoidance question, in prompt order
    pub const AVOIDABLE: [Self; 7] = [
        Self::Dairy,
        Self::Gluten,
        Self::Nuts,
        Self::Eggs,
        Self::Soy,
        Self::Shellfish,
        Self::Sesame,
    ];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Gluten => "gluten",
            Self::Nuts => "nuts",
            Self::Eggs => "eggs",
            Self::Soy => "soy",
            Self::Shellfish => "shellfish",
            Self::Sesame => "sesame",
            Self::Fish => "fish",
        }
    }

    /// Capitalized name for prompts
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Gluten => "Gluten",
            Self::Nuts => "Nuts",
            Self::Eggs => "Eggs",
            Self::Soy => "Soy",
            Self::Shellfish => "Shellfish",
            Self::Sesame => "Sesame",
            Self::Fish => "Fish",
        }
    }

    /// Parse an allergen name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dairy" => Some(Self::Dairy),
            "gluten" => Some(Self::Gluten),
            "nuts" => Some(Self::Nuts),
            "eggs" => Some(Self::Eggs),
            "soy" => Some(Self::Soy),
            "shellfish" => Some(Self::Shellfish),
            "sesame" => Some(Self::Sesame),
            "fish" => Some(Self::Fish),
            _ => None,
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allergen carried by a meal
///
/// A conditional tag marks an allergen that is only present when an optional,
/// substitutable ingredient is used (butter on a steak, the bread under a
/// topping). Conditional tags never disqualify a meal; they surface as
/// advisory flags instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllergenTag {
    /// Which allergen
    pub allergen: Allergen,
    /// Present only with an optional ingredient
    pub conditional: bool,
}

impl AllergenTag {
    /// Allergen that is always present
    #[must_use]
    pub const fn hard(allergen: Allergen) -> Self {
        Self {
            allergen,
            conditional: false,
        }
    }

    /// Allergen present only with an optional ingredient
    #[must_use]
    pub const fn conditional(allergen: Allergen) -> Self {
        Self {
            allergen,
            conditional: true,
        }
    }
}

impl fmt::Display for AllergenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditional {
            write!(f, "{}?", self.allergen)
        } else {
            write!(f, "{}", self.allergen)
        }
    }
}

/// Primary protein source of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinType {
    /// Red meat
    Beef,
    /// Chicken, turkey
    Poultry,
    /// Finfish
    Fish,
    /// Shrimp and other crustaceans
    Shellfish,
    /// Legumes, soy, dairy and egg based
    Plant,
}

impl ProteinType {
    /// Fish or shellfish
    #[must_use]
    pub const fn is_seafood(&self) -> bool {
        matches!(self, Self::Fish | Self::Shellfish)
    }
}

/// Cooking effort a meal takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepEffort {
    /// Under 15 minutes
    Low,
    /// 15 to 30 minutes
    Med,
    /// Over 30 minutes
    High,
}

impl PrepEffort {
    /// Low or medium effort
    #[must_use]
    pub const fn is_at_most_medium(&self) -> bool {
        matches!(self, Self::Low | Self::Med)
    }
}

/// Heat level of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    /// No noticeable heat
    Mild,
    /// Some heat
    Medium,
    /// Hot
    Spicy,
}

/// Macro subset reported with a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// Candidate meal in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique display name
    pub name: String,
    /// Ingredient lines, display only
    pub items: Vec<String>,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Sodium (mg)
    pub sodium_mg: u32,
    /// Calcium (mg)
    pub calcium_mg: u32,
    /// Primary protein source
    pub protein_type: ProteinType,
    /// Allergen tags, hard and conditional
    pub allergens: Vec<AllergenTag>,
    /// Cooking effort
    pub effort: PrepEffort,
    /// Realistically orderable from a restaurant
    pub takeout_ok: bool,
    /// Heat level
    pub spice: SpiceLevel,
    /// Free-text annotations, display only
    pub notes: Vec<String>,
}

impl Meal {
    /// Macro subset for output records
    #[must_use]
    pub const fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// Allergens that are always present
    pub fn hard_allergens(&self) -> impl Iterator<Item = Allergen> + '_ {
        self.allergens
            .iter()
            .filter(|tag| !tag.conditional)
            .map(|tag| tag.allergen)
    }

    /// Whether the meal carries `allergen` only conditionally
    #[must_use]
    pub fn has_conditional(&self, allergen: Allergen) -> bool {
        self.allergens
            .iter()
            .any(|tag| tag.conditional && tag.allergen == allergen)
    }
}
