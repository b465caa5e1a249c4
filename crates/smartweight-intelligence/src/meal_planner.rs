// ABOUTME: Fixed four-meal daily plan sized by the calorie target
// ABOUTME: Breakfast portion switches to large above 1800 kcal per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartweight_core::constants::energy;
use smartweight_core::models::{HealthMetrics, MealPlan, MealSlot, MealSuggestion, PortionSize};

/// Portion size for a daily calorie target
#[must_use]
pub const fn portion_for(daily_calorie_target: u32) -> PortionSize {
    if daily_calorie_target > energy::LARGE_PORTION_THRESHOLD_KCAL {
        PortionSize::Large
    } else {
        PortionSize::Medium
    }
}

/// Daily meal plan for the computed metrics
#[must_use]
pub fn plan_meals(metrics: &HealthMetrics) -> MealPlan {
    let portion = portion_for(metrics.daily_calorie_target);
    let meals = vec![
        MealSuggestion {
            slot: MealSlot::Breakfast,
            description: format!("Banana oatmeal with egg whites ({})", portion.label()),
        },
        MealSuggestion {
            slot: MealSlot::Lunch,
            description: "100g brown rice, grilled chicken breast, stir-fried vegetables"
                .to_owned(),
        },
        MealSuggestion {
            slot: MealSlot::Dinner,
            description: "Vegetable salad with lemon dressing and grilled fish".to_owned(),
        },
        MealSuggestion {
            slot: MealSlot::Snack,
            description: "An apple or low-fat yogurt".to_owned(),
        },
    ];
    MealPlan { portion, meals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_threshold_is_exclusive() {
        assert_eq!(portion_for(1800), PortionSize::Medium);
        assert_eq!(portion_for(1801), PortionSize::Large);
        assert_eq!(portion_for(1200), PortionSize::Medium);
    }
}
