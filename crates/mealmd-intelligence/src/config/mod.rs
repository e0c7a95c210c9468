// ABOUTME: Configuration module for mealmd-intelligence crate
// ABOUTME: Re-exports the scoring weight table and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Named scoring weights with environment overrides
pub mod weights;

pub use error::ConfigError;
pub use weights::ScoringWeights;
