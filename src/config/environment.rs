// ABOUTME: Environment configuration for the MealMD command-line tool
// ABOUTME: Preference snapshot location, default result count, color and log level parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! All settings come from environment variables; command-line flags override
//! them in the binary. Unparsable values fall back to defaults with a warning.

use crate::constants::{defaults, env_config};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational
    Info,
    /// Debug detail
    Debug,
    /// Per-meal scoring traces
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// Directive string understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration for one CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealmdConfig {
    /// Preference snapshot location; `None` when no home directory is known
    pub prefs_path: Option<PathBuf>,
    /// Number of recommendations to show
    pub top_k: usize,
    /// Whether ANSI styling is enabled
    pub color: bool,
}

impl Default for MealmdConfig {
    fn default() -> Self {
        Self {
            prefs_path: default_prefs_path(),
            top_k: defaults::TOP_K,
            color: true,
        }
    }
}

impl MealmdConfig {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefs_path = lookup(env_config::PREFS_PATH)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .or_else(default_prefs_path);

        let top_k = lookup(env_config::TOP_K).map_or(defaults::TOP_K, |raw| {
            raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Invalid {}={raw:?}, using default {}",
                    env_config::TOP_K,
                    defaults::TOP_K
                );
                defaults::TOP_K
            })
        });

        // https://no-color.org: any non-empty value disables color
        let color = lookup(env_config::NO_COLOR).is_none_or(|raw| raw.is_empty());

        let config = Self {
            prefs_path,
            top_k,
            color,
        };
        debug!(?config, "Loaded environment configuration");
        config
    }

    /// Apply a command-line snapshot path, which wins over the environment
    #[must_use]
    pub fn with_prefs_path(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.prefs_path = Some(path.to_path_buf());
        }
        self
    }
}

/// `~/.mealmdrc`, if a home directory can be determined
#[must_use]
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(defaults::PREFS_FILE_NAME))
}
