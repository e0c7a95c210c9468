// ABOUTME: Integration tests for text and JSON rendering of recommendations
// ABOUTME: Checks the printed layout, empty-result output and the JSON schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{lean_seafood_answers, neutral_answers};
use mealmd::constants::messages;
use mealmd::formatters::{render, render_json, render_text, OutputFormat, Theme};
use mealmd::intelligence::{
    MealRecommendationEngine, MealRecommender, RecommendationResponse, ScoringWeights,
};
use serde_json::Value;

fn lean_seafood_response(top_k: usize) -> RecommendationResponse {
    MealRecommendationEngine::new()
        .with_weights(ScoringWeights::default())
        .recommend(&lean_seafood_answers(), top_k, None)
}

#[test]
fn test_text_layout_for_top_pick() {
    let text = render_text(&lean_seafood_response(1), &Theme::plain());

    let expected = "\n=== Top Picks ===\n\
        \n1) Shrimp Rice Bowl  (score: 74.0)\n";
    assert!(text.starts_with(expected), "unexpected header:\n{text}");
    assert!(text.contains("   Macros: 600 kcal | P 42g | C 64g | F 14g\n"));
    assert!(text.contains("   Sodium: 640 mg\n"));
    assert!(text.contains(
        "   Why:\n    - matches fish/seafood preference\n    - cut: high protein, moderate calories\n    - low effort prep\n"
    ));
    assert!(!text.contains("Flags:"));
    assert!(text.ends_with(&format!("\n{}\n", messages::DISCLAIMER)));
}

#[test]
fn test_text_lists_items_and_flags() {
    let response = MealRecommendationEngine::new()
        .with_weights(ScoringWeights::default())
        .recommend(&neutral_answers(), 12, None);
    let text = render_text(&response, &Theme::plain());

    assert!(text.contains("Beef Steak Plate  (score: 50.0)"));
    assert!(text.contains("   Flags: omit butter to be dairy-free\n"));
    assert!(text.contains("   Flags: gluten depends on ingredients\n"));
    assert_eq!(text.matches("   Items: ").count(), 12);
}

#[test]
fn test_text_for_empty_result_is_only_explanation() {
    let response = RecommendationResponse {
        top_recommendations: Vec::new(),
        explanation: messages::NO_MEALS_FIT.to_owned(),
    };
    let text = render_text(&response, &Theme::plain());

    assert_eq!(text, format!("\n=== Top Picks ===\n{}\n", messages::NO_MEALS_FIT));
}

#[test]
fn test_plain_theme_has_no_escape_codes() {
    let text = render_text(&lean_seafood_response(3), &Theme::plain());
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_json_matches_response_schema() {
    let response = lean_seafood_response(2);
    let json = render_json(&response).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let picks = value["top_recommendations"].as_array().unwrap();
    assert_eq!(picks.len(), 2);
    let first = &picks[0];
    assert_eq!(first["name"], "Shrimp Rice Bowl");
    assert_eq!(first["score"], 74.0);
    assert_eq!(first["macros"]["calories"], 600);
    assert_eq!(first["macros"]["protein_g"], 42);
    assert_eq!(first["sodium_mg"], 640);
    assert!(first["items"].as_array().is_some_and(|items| !items.is_empty()));
    assert_eq!(first["flags"], Value::Array(Vec::new()));
    assert_eq!(value["explanation"], messages::DEFAULT_EXPLANATION);

    let parsed: RecommendationResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn test_render_dispatches_on_format() {
    let response = lean_seafood_response(1);
    let theme = Theme::plain();

    let text = render(&response, OutputFormat::Text, &theme).unwrap();
    assert!(text.contains("=== Top Picks ==="));

    let json = render(&response, OutputFormat::from_json_flag(true), &theme).unwrap();
    assert!(json.trim_start().starts_with('{'));
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(OutputFormat::Json.to_string(), "json");
}
