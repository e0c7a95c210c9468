// ABOUTME: Terminal styles for wizard prompts and text output
// ABOUTME: Wraps console::Style so color can be switched off in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use console::Style;

/// Named styles used across prompts and result rendering
#[derive(Debug, Clone)]
pub struct Theme {
    /// Banners, section headers and questions
    pub heading: Style,
    /// Recommendation titles and confirmations
    pub accent: Style,
    /// Hints and the closing disclaimer
    pub hint: Style,
    /// Re-prompt warnings
    pub warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Theme {
    /// Styled theme when `color` is true, otherwise plain text
    ///
    /// With color enabled, `console` still drops escape codes when the
    /// stream is not a terminal.
    #[must_use]
    pub fn new(color: bool) -> Self {
        let finish = |style: Style| {
            if color {
                style
            } else {
                style.force_styling(false)
            }
        };
        Self {
            heading: finish(Style::new().bold()),
            accent: finish(Style::new().cyan()),
            hint: finish(Style::new().dim()),
            warning: finish(Style::new().yellow()),
        }
    }

    /// Theme that never emits escape codes
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }
}
