// ABOUTME: Configuration error types for weight table validation
// ABOUTME: Defines error variants for unparsable overrides and invalid weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for weight table validation.

use mealmd_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse an override value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weight outside the range the scoring rules expect
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
