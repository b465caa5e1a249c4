// ABOUTME: Analysis pipeline for one profile: validate, calculate, estimate, plan
// ABOUTME: Produces an immutable AnalysisReport consumed by the CLI and the advisors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use smartweight_intelligence::{
    compute_metrics, estimate_duration, plan_meals, CalorieConfig, DurationModel,
};
use tracing::{info, instrument};

use crate::errors::AppResult;
use crate::models::{DurationEstimate, HealthMetrics, MealPlan, UserProfile};

/// Everything computed for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Validated inputs
    pub profile: UserProfile,
    /// BMI and calorie budget
    pub metrics: HealthMetrics,
    /// Time to reach the target weight
    pub estimate: DurationEstimate,
    /// Daily meal plan
    pub meal_plan: MealPlan,
}

/// Run the full pipeline for one profile
///
/// # Errors
///
/// Returns a validation error if any profile value is missing or out of range
#[instrument(skip_all, fields(name = %profile.name))]
pub fn analyze(
    profile: UserProfile,
    model: &DurationModel,
    calorie_config: &CalorieConfig,
) -> AppResult<AnalysisReport> {
    profile.validate()?;

    let metrics = compute_metrics(&profile, calorie_config);
    let estimate = estimate_duration(&profile, &metrics, model);
    let meal_plan = plan_meals(&metrics);

    info!(
        bmi = metrics.bmi,
        category = %metrics.bmi_category,
        daily_target = metrics.daily_calorie_target,
        predicted_days = estimate.days,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        profile,
        metrics,
        estimate,
        meal_plan,
    })
}
