// ABOUTME: Output format abstraction for rendering recommendations
// ABOUTME: Supports human-readable text (default) and pretty JSON for automation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Numbered picks with macros, flags and reasons, optionally styled
//! - **JSON**: The serialized `RecommendationResponse`, pretty-printed

/// Pretty JSON rendering
pub mod json;
/// Human-readable rendering
pub mod text;
/// Terminal styles
pub mod theme;

pub use json::render_json;
pub use text::render_text;
pub use theme::Theme;

use crate::errors::AppResult;
use crate::intelligence::RecommendationResponse;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Select JSON when `json` is set, text otherwise
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render `response` in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn render(
    response: &RecommendationResponse,
    format: OutputFormat,
    theme: &Theme,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(response, theme)),
        OutputFormat::Json => render_json(response),
    }
}
