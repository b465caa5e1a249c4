// ABOUTME: BMI classification and calorie budget arithmetic (BMR, TDEE, daily target)
// ABOUTME: Pure, total functions over valid profile ranges using Mifflin-St Jeor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Calculator
//!
//! Stateless arithmetic behind the dashboard metrics. Inputs are assumed to
//! be in range (see `UserProfile::validate`); nothing here fails.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use smartweight_core::constants::bmi;
use smartweight_core::models::{
    ActivityLevel, BmiCategory, BmiClassification, CalorieBudget, HealthMetrics, Sex, UserProfile,
};

use crate::config::CalorieConfig;

/// Map a BMI value onto its category
///
/// Boundaries: `< 18.5` underweight, `[18.5, 24.9)` normal, `[24.9, 29.9)`
/// overweight, everything else obese. The categories are contiguous, so a
/// BMI between 24.9 and 25.0 is overweight.
#[must_use]
pub fn bmi_category(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi_value < bmi::OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi_value < bmi::OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute and classify body-mass index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
#[must_use]
pub fn classify_bmi(weight_kg: f64, height_cm: f64) -> BmiClassification {
    let height_m = height_cm / 100.0;
    let bmi_value = weight_kg / (height_m * height_m);
    BmiClassification {
        bmi: bmi_value,
        category: bmi_category(bmi_value),
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &CalorieConfig,
) -> f64 {
    let coefficients = &config.bmr;
    coefficients.weight_coef.mul_add(
        weight_kg,
        coefficients.height_coef.mul_add(
            height_cm,
            coefficients
                .age_coef
                .mul_add(f64::from(age), coefficients.constant_for(sex)),
        ),
    )
}

/// Daily calorie budget for a person
///
/// TDEE = BMR x activity factor; the daily target is `floor(TDEE - deficit)`
/// but never below `config.min_daily_calories`.
#[must_use]
pub fn compute_calories(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    activity_level: ActivityLevel,
    config: &CalorieConfig,
) -> CalorieBudget {
    let bmr = mifflin_st_jeor(weight_kg, height_cm, age, sex, config);
    let tdee = bmr * config.activity_factors.factor(activity_level);
    CalorieBudget {
        bmr,
        tdee,
        daily_target: daily_target(tdee, config),
    }
}

fn daily_target(tdee: f64, config: &CalorieConfig) -> u32 {
    let raw = (tdee - config.daily_deficit_kcal).floor();
    if raw.is_nan() || raw < f64::from(config.min_daily_calories) {
        config.min_daily_calories
    } else if raw >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        raw as u32
    }
}

/// BMI and calorie budget for a profile in one record
#[must_use]
pub fn compute_metrics(profile: &UserProfile, config: &CalorieConfig) -> HealthMetrics {
    let bmi = classify_bmi(profile.weight_kg, profile.height_cm);
    let budget = compute_calories(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        profile.activity_level,
        config,
    );
    HealthMetrics::new(bmi, budget)
}
