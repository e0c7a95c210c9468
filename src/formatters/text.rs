// ABOUTME: Human-readable rendering of recommendation responses
// ABOUTME: Numbered picks with items, macros, sodium, flags and reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::theme::Theme;
use crate::constants::messages::DISCLAIMER;
use crate::intelligence::{Recommendation, RecommendationResponse};
use std::fmt::Write;

/// Render `response` as the text shown at the end of the wizard
#[must_use]
pub fn render_text(response: &RecommendationResponse, theme: &Theme) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "\n{}", theme.heading.apply_to("=== Top Picks ==="));

    if response.top_recommendations.is_empty() {
        let _ = writeln!(out, "{}", response.explanation);
        return out;
    }

    for (rank, pick) in response.top_recommendations.iter().enumerate() {
        write_pick(&mut out, rank + 1, pick, theme);
    }

    let _ = writeln!(out, "\n{}", theme.hint.apply_to(DISCLAIMER));
    out
}

fn write_pick(out: &mut String, rank: usize, pick: &Recommendation, theme: &Theme) {
    let title = format!("{rank}) {}", pick.name);
    let _ = writeln!(
        out,
        "\n{}  (score: {:.1})",
        theme.accent.apply_to(title),
        pick.score
    );
    let _ = writeln!(out, "   Items: {}", pick.items.join(", "));
    let m = &pick.macros;
    let _ = writeln!(
        out,
        "   Macros: {} kcal | P {}g | C {}g | F {}g",
        m.calories, m.protein_g, m.carbs_g, m.fat_g
    );
    let _ = writeln!(out, "   Sodium: {} mg", pick.sodium_mg);
    if !pick.flags.is_empty() {
        let _ = writeln!(out, "   Flags: {}", pick.flags.join(", "));
    }
    let _ = writeln!(out, "   Why:");
    for reason in &pick.reasons {
        let _ = writeln!(out, "    - {reason}");
    }
}
