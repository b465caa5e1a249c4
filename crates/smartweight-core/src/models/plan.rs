// ABOUTME: Time-to-goal estimate and daily meal plan value records
// ABOUTME: DurationEstimate with chart trajectory points, MealPlan with portion sizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One point of the weekly weight trajectory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    /// Week index, starting at 0
    pub week: u32,
    /// Projected weight at that week (kg)
    pub weight_kg: f64,
}

/// Predicted time to reach the target weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DurationEstimate {
    /// Whole days predicted by the trained model
    pub days: u32,
    /// Days divided by seven, rounded to one decimal
    pub weeks: f64,
    /// Linear chart trajectory from current to target weight
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Portion size used in the meal plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PortionSize {
    /// Daily target above the large-portion threshold
    Large,
    /// Everything else
    Medium,
}

impl PortionSize {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Large => "Large Portion",
            Self::Medium => "Medium Portion",
        }
    }
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snack,
}

impl MealSlot {
    /// Display label with its icon
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast 🍳",
            Self::Lunch => "Lunch 🍱",
            Self::Dinner => "Dinner 🥗",
            Self::Snack => "Snack 🍎",
        }
    }
}

/// One suggested meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSuggestion {
    /// Which meal of the day
    pub slot: MealSlot,
    /// What to eat
    pub description: String,
}

/// Daily meal plan sized to the calorie target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Portion size applied to the plan
    pub portion: PortionSize,
    /// Meals in serving order
    pub meals: Vec<MealSuggestion>,
}
