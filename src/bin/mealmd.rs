// ABOUTME: MealMD command-line entry point
// ABOUTME: Parses flags, runs the wizard, saves the snapshot and prints ranked meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive wizard with colored text output
//! mealmd
//!
//! # Reproducible tie-breaking, five picks, JSON for piping
//! mealmd --seed 42 --top 5 --json
//!
//! # Scripted answers without touching ~/.mealmdrc
//! printf '1\n3\n3\n0\n1\n2\n1\n' | mealmd --json --no-save
//! ```

use clap::Parser;
use mealmd::config::{LogLevel, MealmdConfig};
use mealmd::errors::AppResult;
use mealmd::formatters::{render, OutputFormat, Theme};
use mealmd::intelligence::{MealRecommendationEngine, MealRecommender, ScoringWeights};
use mealmd::logging::LoggingConfig;
use mealmd::preferences::{PreferenceDefaults, PreferenceStore};
use mealmd::wizard::Wizard;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(
    name = "mealmd",
    version,
    about = "MealMD - step-by-step meal recommender.",
    long_about = "Answer a few questions about your goal, training and tastes; MealMD scores its meal catalog and explains the top picks. Not medical advice."
)]
struct Cli {
    /// Print recommendations as JSON and exit
    #[arg(long)]
    json: bool,

    /// Seed for deterministic tie-breaking (negative values are accepted)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// How many meals to show (default: 3, or MEALMD_TOP_K)
    #[arg(long)]
    top: Option<usize>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Don't save your answers to the preference snapshot
    #[arg(long)]
    no_save: bool,

    /// Preference snapshot location (default: ~/.mealmdrc, or MEALMD_PREFS_PATH)
    #[arg(long, value_name = "PATH")]
    prefs_path: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    if let Err(e) = LoggingConfig::from_env().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("mealmd: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = MealmdConfig::from_env().with_prefs_path(cli.prefs_path.as_deref());
    let theme = Theme::new(config.color && !cli.no_color);
    let format = OutputFormat::from_json_flag(cli.json);
    let top_k = cli.top.unwrap_or(config.top_k);
    // Negative seeds keep their bit pattern
    let seed = cli.seed.map(|seed| seed as u64);
    let weights = ScoringWeights::load()?;
    let engine = MealRecommendationEngine::new().with_weights(weights);

    let store = config.prefs_path.map(PreferenceStore::new);
    let defaults = store
        .as_ref()
        .map_or_else(PreferenceDefaults::default, PreferenceStore::load);

    // Prompts move to stderr when stdout carries JSON
    let prompt_out: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut wizard = Wizard::new(io::stdin().lock(), prompt_out, theme.clone(), defaults);
    let answers = wizard.run()?;
    info!(?answers, "Collected answers");

    if !cli.no_save {
        match &store {
            Some(store) => {
                if let Err(e) = store.save(&answers) {
                    warn!(path = %store.path().display(), "Preferences not saved: {e}");
                }
            }
            None => warn!("No home directory found; preferences not saved"),
        }
    }

    let response = engine.recommend(&answers, top_k, seed);
    let rendered = render(&response, format, &theme)?;

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => writeln!(stdout, "{rendered}")?,
        OutputFormat::Text => write!(stdout, "{rendered}")?,
    }
    stdout.flush()?;
    Ok(())
}
