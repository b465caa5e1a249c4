// ABOUTME: Turns health metrics and the trained model into a time-to-goal estimate
// ABOUTME: Whole days, weeks to one decimal, and an evenly spaced weekly chart trajectory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartweight_core::models::{DurationEstimate, HealthMetrics, TrajectoryPoint, UserProfile};
use tracing::warn;

use crate::synthetic_trainer::DurationModel;

/// Predict how long it takes to go from the current to the target weight
///
/// The daily deficit is `tdee - daily_calorie_target`. Days are the model's
/// prediction truncated toward zero; predictions below zero (targets at or
/// above the current weight) clamp to zero. The trajectory only spans
/// `trunc(weeks) + 1` points and is a display aid, not a second prediction.
#[must_use]
pub fn estimate_duration(
    profile: &UserProfile,
    metrics: &HealthMetrics,
    model: &DurationModel,
) -> DurationEstimate {
    let deficit = metrics.deficit();
    let predicted = model.predict(profile.weight_kg, profile.target_weight_kg, deficit);
    let days = whole_days(predicted);
    if !predicted.is_finite() || predicted < 0.0 {
        warn!(
            predicted,
            current_kg = profile.weight_kg,
            target_kg = profile.target_weight_kg,
            "Negative duration prediction clamped to zero days"
        );
    }
    let weeks = round_to_tenth(f64::from(days) / 7.0);

    DurationEstimate {
        days,
        weeks,
        trajectory: weekly_trajectory(profile.weight_kg, profile.target_weight_kg, weeks),
    }
}

fn whole_days(predicted: f64) -> u32 {
    let truncated = predicted.trunc();
    if truncated.is_nan() || truncated <= 0.0 {
        0
    } else if truncated >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Round half away from zero to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `trunc(weeks) + 1` evenly spaced weights from `start_kg` to `target_kg`
///
/// A single point holds only the start weight; otherwise the last point is
/// exactly `target_kg`.
#[must_use]
pub fn weekly_trajectory(start_kg: f64, target_kg: f64, weeks: f64) -> Vec<TrajectoryPoint> {
    let whole_weeks = if weeks.is_finite() && weeks > 0.0 {
        weeks.trunc() as u32
    } else {
        0
    };
    if whole_weeks == 0 {
        return vec![TrajectoryPoint {
            week: 0,
            weight_kg: start_kg,
        }];
    }

    let step = (target_kg - start_kg) / f64::from(whole_weeks);
    (0..=whole_weeks)
        .map(|week| TrajectoryPoint {
            week,
            weight_kg: if week == whole_weeks {
                target_kg
            } else {
                step.mul_add(f64::from(week), start_kg)
            },
        })
        .collect()
}
