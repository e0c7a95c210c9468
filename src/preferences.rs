// ABOUTME: Preference snapshot store remembering the last answers in ~/.mealmdrc
// ABOUTME: Lenient field-by-field loading and pretty-printed JSON saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference snapshot
//!
//! The snapshot is a flat JSON object with the answer fields at top level.
//! Loading never fails: a missing or unreadable file, malformed JSON, or an
//! unknown value for a field only removes the affected default.

use crate::errors::{AppError, AppResult};
use crate::models::{
    Allergen, AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
    SpicePreference,
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-field defaults recovered from a snapshot
///
/// Also serves as the wizard's working draft: each answered step fills its
/// field, so revisiting a step offers the latest answer as the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceDefaults {
    /// Previous goal
    pub goal: Option<Goal>,
    /// Previous timing
    pub timing: Option<MealTiming>,
    /// Previous protein preference
    pub protein_pref: Option<ProteinPreference>,
    /// Previous avoidances; `None` when absent or unreadable
    pub avoids: Option<BTreeSet<Allergen>>,
    /// Previous effort
    pub effort: Option<EffortPreference>,
    /// Previous sodium preference
    pub sodium_pref: Option<SodiumPreference>,
    /// Previous spice preference
    pub spice_pref: Option<SpicePreference>,
}

impl PreferenceDefaults {
    /// Whether no field has a default
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Recover whatever fields parse from a snapshot object
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("Preference snapshot is not a JSON object, ignoring it");
            return Self::default();
        };

        Self {
            goal: parse_field(object, "goal", Goal::from_str_lossy),
            timing: parse_field(object, "timing", MealTiming::from_str_lossy),
            protein_pref: parse_field(object, "protein_pref", ProteinPreference::from_str_lossy),
            avoids: parse_avoids(object),
            effort: parse_field(object, "effort", EffortPreference::from_str_lossy),
            sodium_pref: parse_field(object, "sodium_pref", SodiumPreference::from_str_lossy),
            spice_pref: parse_field(object, "spice_pref", SpicePreference::from_str_lossy),
        }
    }

    /// Every field of a completed answer set
    #[must_use]
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            goal: Some(answers.goal),
            timing: Some(answers.timing),
            protein_pref: Some(answers.protein_pref),
            avoids: Some(answers.avoids.clone()),
            effort: Some(answers.effort),
            sodium_pref: Some(answers.sodium_pref),
            spice_pref: Some(answers.spice_pref),
        }
    }

    /// Complete answer set, if every field is present
    #[must_use]
    pub fn to_answers(&self) -> Option<AnswerSet> {
        Some(AnswerSet {
            goal: self.goal?,
            timing: self.timing?,
            protein_pref: self.protein_pref?,
            avoids: self.avoids.clone().unwrap_or_default(),
            effort: self.effort?,
            sodium_pref: self.sodium_pref?,
            spice_pref: self.spice_pref?,
        })
    }
}

fn parse_field<T>(
    object: &Map<String, Value>,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = object.get(key)?;
    let parsed = raw.as_str().and_then(parse);
    if parsed.is_none() {
        warn!(field = key, value = %raw, "Ignoring unrecognized preference value");
    }
    parsed
}

fn parse_avoids(object: &Map<String, Value>) -> Option<BTreeSet<Allergen>> {
    let raw = object.get("avoids")?;
    let Some(entries) = raw.as_array() else {
        warn!(value = %raw, "Ignoring avoids: expected a list");
        return None;
    };

    let mut avoids = BTreeSet::new();
    for entry in entries {
        match entry.as_str().and_then(Allergen::from_str_lossy) {
            Some(allergen) => {
                avoids.insert(allergen);
            }
            None => warn!(value = %entry, "Ignoring unrecognized avoidance"),
        }
    }
    Some(avoids)
}

/// Reads and writes the preference snapshot at one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load defaults, degrading to none on any problem
    #[must_use]
    pub fn load(&self) -> PreferenceDefaults {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No preference snapshot yet");
                return PreferenceDefaults::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), "Cannot read preference snapshot: {e}");
                return PreferenceDefaults::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => {
                let defaults = PreferenceDefaults::from_json(&value);
                debug!(path = %self.path.display(), ?defaults, "Loaded preference snapshot");
                defaults
            }
            Err(e) => {
                warn!(path = %self.path.display(), "Malformed preference snapshot: {e}");
                PreferenceDefaults::default()
            }
        }
    }

    /// Save `answers` as pretty-printed JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self, answers: &AnswerSet) -> AppResult<()> {
        let json = serde_json::to_string_pretty(answers)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Cannot create {}", parent.display())).with_source(e)
            })?;
        }
        fs::write(&self.path, json + "\n").map_err(|e| {
            AppError::storage(format!("Cannot write {}", self.path.display())).with_source(e)
        })?;
        debug!(path = %self.path.display(), "Saved preference snapshot");
        Ok(())
    }
}
