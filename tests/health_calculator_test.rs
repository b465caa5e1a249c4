// ABOUTME: Integration tests for BMI classification and calorie budget arithmetic
// ABOUTME: Covers category boundaries, Mifflin-St Jeor, activity ordering and the 1200 kcal floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartweight::models::{ActivityLevel, BmiCategory, Sex};
use smartweight_intelligence::health_calculator::{bmi_category, mifflin_st_jeor};
use smartweight_intelligence::{classify_bmi, compute_calories, compute_metrics, CalorieConfig};

mod common;

#[test]
fn test_classify_bmi_sample() {
    let classification = classify_bmi(75.0, 160.0);
    assert!((classification.bmi - 29.296_875).abs() < 1e-9);
    assert_eq!(classification.category, BmiCategory::Overweight);
    assert_eq!(classification.icon(), "⚠️");
}

#[test]
fn test_bmi_categories_partition() {
    // every value lands in exactly one category, walking the boundaries in order
    let cases = [
        (10.0, BmiCategory::Underweight),
        (18.499, BmiCategory::Underweight),
        (18.5, BmiCategory::Normal),
        (22.0, BmiCategory::Normal),
        (24.9, BmiCategory::Overweight),
        (24.95, BmiCategory::Overweight),
        (25.0, BmiCategory::Overweight),
        (29.899, BmiCategory::Overweight),
        (29.9, BmiCategory::Obese),
        (45.0, BmiCategory::Obese),
    ];
    for (bmi, expected) in cases {
        assert_eq!(bmi_category(bmi), expected, "bmi {bmi}");
    }
    assert_eq!(BmiCategory::Normal.icon(), "✅");
    assert_eq!(BmiCategory::Obese.icon(), "🚨");
}

#[test]
fn test_mifflin_st_jeor_by_sex() {
    let config = CalorieConfig::default();
    let male = mifflin_st_jeor(80.0, 180.0, 40, Sex::Male, &config);
    let female = mifflin_st_jeor(80.0, 180.0, 40, Sex::Female, &config);
    // 800 + 1125 - 200
    assert!((male - 1730.0).abs() < 1e-9);
    assert!((female - 1564.0).abs() < 1e-9);
}

#[test]
fn test_tdee_increases_with_activity() {
    let config = CalorieConfig::default();
    let tdees: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|level| compute_calories(75.0, 160.0, 30, Sex::Female, *level, &config).tdee)
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((tdees[0] - 1439.0 * 1.2).abs() < 1e-9);
    assert!((tdees[4] - 1439.0 * 1.9).abs() < 1e-9);
}

#[test]
fn test_daily_target_floor() {
    let config = CalorieConfig::default();
    // small, older, sedentary: TDEE - 500 lands below the floor
    let budget = compute_calories(40.0, 140.0, 80, Sex::Female, ActivityLevel::Sedentary, &config);
    assert!(budget.tdee - 500.0 < 1200.0);
    assert_eq!(budget.daily_target, 1200);

    for weight in [30.0, 60.0, 120.0, 200.0] {
        for level in ActivityLevel::ALL {
            let budget = compute_calories(weight, 150.0, 60, Sex::Female, level, &config);
            assert!(budget.daily_target >= 1200);
        }
    }
}

#[test]
fn test_compute_metrics_sample() {
    let metrics = compute_metrics(&common::sample_profile(), &CalorieConfig::default());
    assert!((metrics.bmr - 1439.0).abs() < 1e-9);
    assert!((metrics.tdee - 1978.625).abs() < 1e-9);
    assert_eq!(metrics.daily_calorie_target, 1478);
    assert!((metrics.deficit() - 500.625).abs() < 1e-9);
}

#[test]
fn test_unknown_activity_level_uses_sedentary_factor() {
    let level = ActivityLevel::from_level_or_default(9);
    let budget = compute_calories(75.0, 160.0, 30, Sex::Female, level, &CalorieConfig::default());
    assert!((budget.tdee - 1439.0 * 1.2).abs() < 1e-9);
}
