// ABOUTME: Step-by-step wizard collecting one AnswerSet from numbered prompts
// ABOUTME: Seven questions with snapshot defaults and back navigation to any earlier step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Answer-set wizard
//!
//! Questions run in a fixed order: goal, timing, protein, avoidances, effort,
//! sodium, spice. Every step after the first accepts `b` to go back one
//! step. Answers given so far become the Enter defaults when a step is
//! revisited.

/// Numbered prompt primitives
pub mod prompts;

pub use prompts::{parse_choice, parse_multi, Answer, Prompter};

use crate::errors::{AppError, AppResult};
use crate::formatters::Theme;
use crate::models::{
    Allergen, AnswerSet, EffortPreference, Goal, MealTiming, ProteinPreference, SodiumPreference,
    SpicePreference,
};
use crate::preferences::PreferenceDefaults;
use std::io::{BufRead, Write};
use tracing::debug;

const BANNER: &str = "=== MealMD (step-by-step) ===";
const INSTRUCTIONS: &str =
    "Answer with the number of your choice. Type 'b' to go back when available.";

const GOAL_OPTIONS: [(Goal, &str); 3] = [
    (Goal::Cut, "Cut (lean)"),
    (Goal::Maintenance, "Maintenance"),
    (Goal::Bulk, "Bulk (gain)"),
];

const TIMING_OPTIONS: [(MealTiming, &str); 3] = [
    (MealTiming::Pre, "Pre-workout (0–2h before)"),
    (MealTiming::Post, "Post-workout (0–2h after)"),
    (MealTiming::Any, "Anytime"),
];

const PROTEIN_OPTIONS: [(ProteinPreference, &str); 5] = [
    (ProteinPreference::Beef, "Beef/red meat"),
    (ProteinPreference::Poultry, "Poultry (chicken/turkey)"),
    (ProteinPreference::FishSeafood, "Fish/seafood"),
    (ProteinPreference::PlantOnly, "Plant-only"),
    (ProteinPreference::NoPreference, "No preference"),
];

const EFFORT_OPTIONS: [(EffortPreference, &str); 4] = [
    (EffortPreference::Low, "Low (<15 min)"),
    (EffortPreference::Med, "Medium (15–30 min)"),
    (EffortPreference::High, "High (>30 min)"),
    (EffortPreference::Restaurant, "Restaurant/Takeout OK"),
];

const SODIUM_OPTIONS: [(SodiumPreference, &str); 2] = [
    (SodiumPreference::Normal, "Normal"),
    (SodiumPreference::Lower, "Lower sodium"),
];

const SPICE_OPTIONS: [(SpicePreference, &str); 4] = [
    (SpicePreference::Mild, "Mild"),
    (SpicePreference::Medium, "Medium"),
    (SpicePreference::Spicy, "Spicy"),
    (SpicePreference::NoPref, "No preference"),
];

/// Wizard question, in asking order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Body composition goal
    Goal,
    /// Meal timing
    Timing,
    /// Protein preference
    Protein,
    /// Allergen avoidances (multi-select)
    Avoids,
    /// Cooking effort
    Effort,
    /// Sodium sensitivity
    Sodium,
    /// Heat preference
    Spice,
}

impl Step {
    /// Following step, `None` after the last
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Goal => Some(Self::Timing),
            Self::Timing => Some(Self::Protein),
            Self::Protein => Some(Self::Avoids),
            Self::Avoids => Some(Self::Effort),
            Self::Effort => Some(Self::Sodium),
            Self::Sodium => Some(Self::Spice),
            Self::Spice => None,
        }
    }

    /// Preceding step; the first step is its own predecessor
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Goal | Self::Timing => Self::Goal,
            Self::Protein => Self::Timing,
            Self::Avoids => Self::Protein,
            Self::Effort => Self::Avoids,
            Self::Sodium => Self::Effort,
            Self::Spice => Self::Sodium,
        }
    }

    const fn allows_back(self) -> bool {
        !matches!(self, Self::Goal)
    }
}

/// Collects an `AnswerSet` interactively
pub struct Wizard<R, W> {
    prompter: Prompter<R, W>,
    defaults: PreferenceDefaults,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    /// Wizard reading from `input` and prompting on `output`
    pub const fn new(input: R, output: W, theme: Theme, defaults: PreferenceDefaults) -> Self {
        Self {
            prompter: Prompter::new(input, output, theme),
            defaults,
        }
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        self.prompter.into_parts()
    }

    /// Ask every question and return the completed answer set
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if input ends before the last answer,
    /// or a storage error if prompts cannot be written
    pub fn run(&mut self) -> AppResult<AnswerSet> {
        let banner = self.prompter.theme().heading.apply_to(BANNER).to_string();
        self.prompter.say(banner)?;
        self.prompter.say(INSTRUCTIONS)?;

        let mut draft = self.defaults.clone();
        let mut step = Some(Step::Goal);
        while let Some(current) = step {
            step = if self.ask(current, &mut draft)? {
                current.next()
            } else {
                debug!(from = ?current, "Going back one step");
                Some(current.previous())
            };
        }

        draft
            .to_answers()
            .ok_or_else(|| AppError::internal("Wizard finished with unanswered questions"))
    }

    /// Ask one step; `Ok(false)` means the user went back
    fn ask(&mut self, step: Step, draft: &mut PreferenceDefaults) -> AppResult<bool> {
        let back = step.allows_back();
        let p = &mut self.prompter;
        let answered = match step {
            Step::Goal => {
                let answer = p.choose("What's your current goal?", &GOAL_OPTIONS, draft.goal, back)?;
                store(answer, &mut draft.goal)
            }
            Step::Timing => {
                let answer = p.choose("When is this meal?", &TIMING_OPTIONS, draft.timing, back)?;
                store(answer, &mut draft.timing)
            }
            Step::Protein => {
                let answer = p.choose(
                    "Pick a protein preference.",
                    &PROTEIN_OPTIONS,
                    draft.protein_pref,
                    back,
                )?;
                store(answer, &mut draft.protein_pref)
            }
            Step::Avoids => self.ask_avoids(draft)?,
            Step::Effort => {
                let answer =
                    p.choose("How much cooking effort?", &EFFORT_OPTIONS, draft.effort, back)?;
                store(answer, &mut draft.effort)
            }
            Step::Sodium => {
                let answer = p.choose("Sodium needs?", &SODIUM_OPTIONS, draft.sodium_pref, back)?;
                store(answer, &mut draft.sodium_pref)
            }
            Step::Spice => {
                let answer =
                    p.choose("Spice preference?", &SPICE_OPTIONS, draft.spice_pref, back)?;
                store(answer, &mut draft.spice_pref)
            }
        };
        Ok(answered)
    }

    fn ask_avoids(&mut self, draft: &mut PreferenceDefaults) -> AppResult<bool> {
        let options = Allergen::AVOIDABLE.map(|allergen| (allergen, allergen.display_name()));
        let current = draft.avoids.clone().unwrap_or_default();
        let avoids = match self.prompter.choose_many(
            "Do you need to avoid anything? (comma-separated, Enter to keep current).",
            &options,
            &current,
            true,
        )? {
            Answer::Value(picked) => picked,
            Answer::Keep => current,
            Answer::Back => return Ok(false),
        };

        if !avoids.is_empty() {
            let names: Vec<&str> = avoids.iter().map(Allergen::as_str).collect();
            let line = format!("Avoiding: {}", names.join(", "));
            let styled = self.prompter.theme().accent.apply_to(line).to_string();
            self.prompter.say(styled)?;
        }
        draft.avoids = Some(avoids);
        Ok(true)
    }
}

/// Record a single-choice answer; returns false when the user went back
fn store<T>(answer: Answer<T>, slot: &mut Option<T>) -> bool {
    match answer {
        Answer::Value(value) => {
            *slot = Some(value);
            true
        }
        Answer::Keep => slot.is_some(),
        Answer::Back => false,
    }
}
