// ABOUTME: Configuration module for the MealMD command-line tool
// ABOUTME: Environment-driven settings; the scoring weight table lives in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and runtime configuration
pub mod environment;

pub use environment::{default_prefs_path, LogLevel, MealmdConfig};
