// ABOUTME: JSON rendering of recommendation responses for piping and automation
// ABOUTME: Pretty-printed, same shape as the serialized RecommendationResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::intelligence::RecommendationResponse;

/// Render `response` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_json(response: &RecommendationResponse) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(response)?)
}
