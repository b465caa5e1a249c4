// ABOUTME: End-to-end tests of the analysis pipeline from profile to report
// ABOUTME: Reference profile numbers, validation at the boundary, meal plan sizing and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartweight::analysis::{analyze, AnalysisReport};
use smartweight::errors::ErrorCode;
use smartweight::models::{ActivityLevel, BmiCategory, MealSlot, PortionSize, Sex, UserProfile};
use smartweight_intelligence::{CalorieConfig, DurationModel};

mod common;

#[test]
fn test_reference_profile() {
    let report = common::sample_report();
    let metrics = &report.metrics;

    assert!((metrics.bmi - 29.3).abs() < 0.01);
    assert_eq!(metrics.bmi_category, BmiCategory::Overweight);
    assert_eq!(metrics.bmi_category.icon(), "⚠️");
    assert!((metrics.bmr - 1439.0).abs() < 1e-9);
    assert!((metrics.tdee - 1978.625).abs() < 1e-9);
    assert_eq!(metrics.daily_calorie_target, 1478);
    assert!((metrics.deficit() - 500.625).abs() < 1e-9);

    assert!(report.estimate.days > 0 && report.estimate.days < 365);

    assert_eq!(report.meal_plan.portion, PortionSize::Medium);
    let slots: Vec<MealSlot> = report.meal_plan.meals.iter().map(|meal| meal.slot).collect();
    assert_eq!(
        slots,
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner, MealSlot::Snack]
    );
    assert!(report.meal_plan.meals[0].description.contains("Medium Portion"));
}

#[test]
fn test_large_portion_for_high_target() {
    let profile = UserProfile {
        name: "Budi".to_owned(),
        age: 25,
        sex: Sex::Male,
        weight_kg: 100.0,
        height_cm: 185.0,
        activity_level: ActivityLevel::Athlete,
        target_weight_kg: 85.0,
    };
    let report = analyze(
        profile,
        DurationModel::global().unwrap(),
        &CalorieConfig::default(),
    )
    .unwrap();
    assert!(report.metrics.daily_calorie_target > 1800);
    assert_eq!(report.meal_plan.portion, PortionSize::Large);
}

#[test]
fn test_out_of_range_input_rejected() {
    let model = DurationModel::global().unwrap();
    let config = CalorieConfig::default();

    let too_young = UserProfile {
        age: 12,
        ..common::sample_profile()
    };
    assert_eq!(
        analyze(too_young, model, &config).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let too_tall = UserProfile {
        height_cm: 260.0,
        ..common::sample_profile()
    };
    assert_eq!(
        analyze(too_tall, model, &config).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let nameless = UserProfile {
        name: "  ".to_owned(),
        ..common::sample_profile()
    };
    assert_eq!(
        analyze(nameless, model, &config).unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_report_serializes_to_json() {
    let report = common::sample_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["profile"]["name"], "Sari");
    assert_eq!(json["metrics"]["daily_calorie_target"], 1478);
    assert_eq!(json["meal_plan"]["portion"], "medium");
    assert!(json["estimate"]["trajectory"].is_array());

    let restored: AnalysisReport = serde_json::from_value(json).unwrap();
    assert_eq!(restored, report);
}
