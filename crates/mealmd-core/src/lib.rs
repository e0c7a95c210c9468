// ABOUTME: Core types and constants for the MealMD meal recommender
// ABOUTME: Foundation crate with error handling, meal/answer models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealMD` Core
//!
//! Foundation crate providing shared types and constants for the `MealMD`
//! recommender. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring thresholds, reason/flag messages, and defaults
//! - **models**: `Meal`, `AnswerSet` and the closed enums they are built from

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Meal, `AnswerSet`, allergens, preferences)
pub mod models;
