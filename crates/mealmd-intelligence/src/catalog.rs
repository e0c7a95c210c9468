// ABOUTME: Built-in meal catalog: twelve candidate meals with macros and attributes
// ABOUTME: Constructed once per process and shared read-only by the recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealmd_core::models::{Allergen, AllergenTag, Meal, PrepEffort, ProteinType, SpiceLevel};
use std::sync::OnceLock;

static CATALOG: OnceLock<Vec<Meal>> = OnceLock::new();

/// The built-in catalog, in display order
#[must_use]
pub fn meals() -> &'static [Meal] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a catalog meal by exact name
#[must_use]
pub fn find(name: &str) -> Option<&'static Meal> {
    meals().iter().find(|meal| meal.name == name)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[allow(clippy::too_many_lines)]
fn build_catalog() -> Vec<Meal> {
    use Allergen::{Dairy, Eggs, Fish, Gluten, Nuts, Sesame, Shellfish, Soy};

    vec![
        Meal {
            name: "Grilled Salmon Bowl".into(),
            items: strings(&[
                "grilled salmon 5 oz",
                "quinoa 1 cup",
                "spinach",
                "tomato",
                "olive oil",
                "lemon",
                "plain yogurt 1/2 cup",
            ]),
            calories: 650,
            protein_g: 45,
            carbs_g: 55,
            fat_g: 24,
            sodium_mg: 520,
            calcium_mg: 250,
            protein_type: ProteinType::Fish,
            allergens: vec![AllergenTag::hard(Dairy)],
            effort: PrepEffort::Med,
            takeout_ok: true,
            spice: SpiceLevel::Mild,
            notes: strings(&["Omega-3s"]),
        },
        Meal {
            name: "Chicken Thigh + Sweet Potato Plate".into(),
            items: strings(&[
                "roasted chicken thigh 6 oz",
                "baked sweet potato",
                "steamed broccoli",
                "tahini drizzle",
            ]),
            calories: 620,
            protein_g: 42,
            carbs_g: 62,
            fat_g: 18,
            sodium_mg: 480,
            calcium_mg: 180,
            protein_type: ProteinType::Poultry,
            allergens: vec![AllergenTag::hard(Sesame)],
            effort: PrepEffort::Med,
            takeout_ok: true,
            spice: SpiceLevel::Mild,
            notes: strings(&["balanced"]),
        },
        Meal {
            name: "Tofu Stir-Fry".into(),
            items: strings(&[
                "extra-firm tofu 6 oz",
                "mixed vegetables",
                "brown rice 1 cup",
                "garlic-ginger sauce (low sodium)",
            ]),
            calories: 600,
            protein_g: 36,
            carbs_g: 70,
            fat_g: 16,
            sodium_mg: 420,
            calcium_mg: 350,
            protein_type: ProteinType::Plant,
            allergens: vec![AllergenTag::hard(Soy), AllergenTag::conditional(Gluten)],
            effort: PrepEffort::Low,
            takeout_ok: false,
            spice: SpiceLevel::Medium,
            notes: strings(&["plant protein"]),
        },
        Meal {
            name: "Lentil Curry + Rice".into(),
            items: strings(&[
                "red lentil curry 1.5 cups",
                "basmati rice 1 cup",
                "cucumber salad",
            ]),
            calories: 680,
            protein_g: 32,
            carbs_g: 98,
            fat_g: 16,
            sodium_mg: 540,
            calcium_mg: 140,
            protein_type: ProteinType::Plant,
            allergens: Vec::new(),
            effort: PrepEffort::Med,
            takeout_ok: true,
            spice: SpiceLevel::Medium,
            notes: strings(&["good fiber"]),
        },
        Meal {
            name: "Turkey Chili (Lean)".into(),
            items: strings(&[
                "ground turkey 93% 6 oz",
                "beans",
                "tomato",
                "onion",
                "spices",
            ]),
            calories: 640,
            protein_g: 48,
            carbs_g: 58,
            fat_g: 18,
            sodium_mg: 620,
            calcium_mg: 160,
            protein_type: ProteinType::Poultry,
            allergens: Vec::new(),
            effort: PrepEffort::Med,
            takeout_ok: true,
            spice: SpiceLevel::Medium,
            notes: strings(&["high protein"]),
        },
        Meal {
            name: "Beef Steak Plate".into(),
            items: strings(&[
                "sirloin steak 6 oz",
                "roasted potatoes",
                "asparagus",
                "butter",
            ]),
            calories: 720,
            protein_g: 50,
            carbs_g: 46,
            fat_g: 30,
            sodium_mg: 540,
            calcium_mg: 60,
            protein_type: ProteinType::Beef,
            allergens: vec![AllergenTag::conditional(Dairy)],
            effort: PrepEffort::High,
            takeout_ok: true,
            spice: SpiceLevel::Mild,
            notes: strings(&["creatine-rich"]),
        },
        Meal {
            name: "Egg White Veggie Omelet + Oats".into(),
            items: strings(&[
                "egg white omelet (4 whites)",
                "mixed veggies",
                "rolled oats 1 cup",
                "berries",
            ]),
            calories: 520,
            protein_g: 36,
            carbs_g: 66,
            fat_g: 8,
            sodium_mg: 420,
            calcium_mg: 180,
            protein_type: ProteinType::Plant,
            allergens: vec![AllergenTag::hard(Eggs), AllergenTag::conditional(Gluten)],
            effort: PrepEffort::Low,
            takeout_ok: false,
            spice: SpiceLevel::Mild,
            notes: strings(&["light"]),
        },
        Meal {
            name: "Greek Yogurt Power Bowl".into(),
            items: strings(&[
                "plain Greek yogurt 1.5 cups",
                "berries",
                "chia seeds",
                "walnuts",
                "honey",
            ]),
            calories: 580,
            protein_g: 42,
            carbs_g: 48,
            fat_g: 20,
            sodium_mg: 180,
            calcium_mg: 450,
            protein_type: ProteinType::Plant,
            allergens: vec![AllergenTag::hard(Dairy), AllergenTag::hard(Nuts)],
            effort: PrepEffort::Low,
            takeout_ok: false,
            spice: SpiceLevel::Mild,
            notes: strings(&["easy"]),
        },
        Meal {
            name: "Sardine Avocado Toast".into(),
            items: strings(&[
                "whole-grain toast 2 slices",
                "sardines in olive oil 1 tin",
                "avocado",
                "lemon",
            ]),
            calories: 560,
            protein_g: 32,
            carbs_g: 44,
            fat_g: 28,
            sodium_mg: 520,
            calcium_mg: 320,
            protein_type: ProteinType::Fish,
            allergens: vec![AllergenTag::conditional(Gluten), AllergenTag::hard(Fish)],
            effort: PrepEffort::Low,
            takeout_ok: true,
            spice: SpiceLevel::Mild,
            notes: strings(&["omega-3s"]),
        },
        Meal {
            name: "Tempeh Buddha Bowl".into(),
            items: strings(&[
                "tempeh 6 oz",
                "farro 1 cup",
                "kale",
                "roasted peppers",
                "tahini-lemon",
            ]),
            calories: 620,
            protein_g: 38,
            carbs_g: 70,
            fat_g: 16,
            sodium_mg: 460,
            calcium_mg: 220,
            protein_type: ProteinType::Plant,
            allergens: vec![AllergenTag::hard(Soy), AllergenTag::hard(Sesame)],
            effort: PrepEffort::Med,
            takeout_ok: false,
            spice: SpiceLevel::Mild,
            notes: strings(&["fermented"]),
        },
        Meal {
            name: "Shrimp Rice Bowl".into(),
            items: strings(&[
                "shrimp 6 oz",
                "jasmine rice 1 cup",
                "cabbage slaw",
                "lime",
                "olive oil",
            ]),
            calories: 600,
            protein_g: 42,
            carbs_g: 64,
            fat_g: 14,
            sodium_mg: 640,
            calcium_mg: 160,
            protein_type: ProteinType::Shellfish,
            allergens: vec![AllergenTag::hard(Shellfish)],
            effort: PrepEffort::Low,
            takeout_ok: true,
            spice: SpiceLevel::Mild,
            notes: strings(&["lean protein"]),
        },
        Meal {
            name: "Chickpea Pasta Primavera".into(),
            items: strings(&[
                "chickpea pasta 3 oz dry",
                "zucchini",
                "tomato",
                "olive oil",
                "basil",
            ]),
            calories: 580,
            protein_g: 34,
            carbs_g: 70,
            fat_g: 14,
            sodium_mg: 380,
            calcium_mg: 120,
            protein_type: ProteinType::Plant,
            allergens: Vec::new(),
            effort: PrepEffort::Low,
            takeout_ok: false,
            spice: SpiceLevel::Mild,
            notes: strings(&["high fiber"]),
        },
    ]
}
