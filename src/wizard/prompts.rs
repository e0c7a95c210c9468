// ABOUTME: Line-oriented numbered prompts with defaults, back navigation and multi-select
// ABOUTME: Input parsing is separated from I/O so it can be tested without a terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::formatters::Theme;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{BufRead, Write};

const INVALID_OPTION: &str = "Please enter a valid option.";
const INVALID_NUMBERS: &str = "Please enter valid numbers like 1,3,7 (or 0 for none).";
const MULTI_HINT: &str = "Enter numbers separated by commas (e.g., 1,4,6) or 0 for none.";

/// Outcome of one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    /// The user picked a value
    Value(T),
    /// The user pressed Enter on a multi-select to keep the preselection
    Keep,
    /// The user asked to return to the previous step
    Back,
}

/// Parse a single-choice reply into a zero-based option index
///
/// Returns `None` when the reply is not acceptable and the user should be
/// asked again.
#[must_use]
pub fn parse_choice(
    raw: &str,
    count: usize,
    default: Option<usize>,
    allow_back: bool,
) -> Option<Answer<usize>> {
    let reply = raw.trim().to_lowercase();
    if reply.is_empty() {
        return default.map(Answer::Value);
    }
    if allow_back && reply == "b" {
        return Some(Answer::Back);
    }
    match reply.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(Answer::Value(n - 1)),
        _ => None,
    }
}

/// Parse a multi-select reply into sorted, deduplicated zero-based indices
///
/// Enter keeps the preselection, `0` selects nothing.
#[must_use]
pub fn parse_multi(raw: &str, count: usize, allow_back: bool) -> Option<Answer<Vec<usize>>> {
    let reply = raw.trim().to_lowercase();
    if reply.is_empty() {
        return Some(Answer::Keep);
    }
    if allow_back && reply == "b" {
        return Some(Answer::Back);
    }
    if reply == "0" {
        return Some(Answer::Value(Vec::new()));
    }

    let mut picked = BTreeSet::new();
    for part in reply.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                picked.insert(n - 1);
            }
            _ => return None,
        }
    }
    Some(Answer::Value(picked.into_iter().collect()))
}

/// Numbered prompts over any line reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt on `output`, reading replies from `input`
    pub const fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    /// Styles in use
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask a single-choice question; `current` becomes the Enter default
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the output cannot be written
    pub fn choose<T: Copy + PartialEq>(
        &mut self,
        question: &str,
        options: &[(T, &str)],
        current: Option<T>,
        allow_back: bool,
    ) -> AppResult<Answer<T>> {
        self.show_question(question, options.iter().map(|(_, label)| *label))?;
        if allow_back {
            self.say("b. Back")?;
        }

        let default = current.and_then(|value| options.iter().position(|(v, _)| *v == value));
        loop {
            let reply = self.read_reply()?;
            let answer = match parse_choice(&reply, options.len(), default, allow_back) {
                Some(Answer::Value(index)) => options.get(index).map(|(v, _)| Answer::Value(*v)),
                Some(Answer::Back) => Some(Answer::Back),
                Some(Answer::Keep) | None => None,
            };
            if let Some(answer) = answer {
                return Ok(answer);
            }
            let warning = self.theme.warning.apply_to(INVALID_OPTION).to_string();
            self.say(warning)?;
        }
    }

    /// Ask a comma-separated multi-select question
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the output cannot be written
    pub fn choose_many<T: Copy + Ord>(
        &mut self,
        question: &str,
        options: &[(T, &str)],
        preselected: &BTreeSet<T>,
        allow_back: bool,
    ) -> AppResult<Answer<BTreeSet<T>>> {
        self.show_question(question, options.iter().map(|(_, label)| *label))?;
        self.say("0. None/Done")?;
        if allow_back {
            self.say("b. Back")?;
        }

        let shown: Vec<&str> = options
            .iter()
            .filter(|(value, _)| preselected.contains(value))
            .map(|(_, label)| *label)
            .collect();
        if !shown.is_empty() {
            let line = format!("(Preselected: {}. Press Enter to keep.)", shown.join(", "));
            let styled = self.theme.hint.apply_to(line).to_string();
            self.say(styled)?;
        }
        let hint = self.theme.hint.apply_to(MULTI_HINT).to_string();
        self.say(hint)?;

        loop {
            let reply = self.read_reply()?;
            match parse_multi(&reply, options.len(), allow_back) {
                Some(Answer::Value(indices)) => {
                    return Ok(Answer::Value(
                        indices
                            .into_iter()
                            .filter_map(|i| options.get(i).map(|(v, _)| *v))
                            .collect(),
                    ));
                }
                Some(Answer::Keep) => return Ok(Answer::Keep),
                Some(Answer::Back) => return Ok(Answer::Back),
                None => {
                    let warning = self.theme.warning.apply_to(INVALID_NUMBERS).to_string();
                    self.say(warning)?;
                }
            }
        }
    }

    fn show_question<'a>(
        &mut self,
        question: &str,
        labels: impl Iterator<Item = &'a str>,
    ) -> AppResult<()> {
        let heading = self.theme.heading.apply_to(question).to_string();
        self.say(format_args!("\n{heading}"))?;
        for (number, label) in labels.enumerate() {
            self.say(format_args!("{}. {label}", number + 1))?;
        }
        Ok(())
    }

    fn read_reply(&mut self) -> AppResult<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| {
            AppError::invalid_input("Failed to read an answer from input").with_source(e)
        })?;
        if read == 0 {
            return Err(AppError::invalid_input(
                "Input ended before every question was answered",
            ));
        }
        Ok(line)
    }
}
