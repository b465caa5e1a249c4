// ABOUTME: Health metric value records derived from a user profile
// ABOUTME: BMI category with icon glyphs, calorie budget, and combined HealthMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body-mass index category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 24.9)
    Normal,
    /// BMI in [24.9, 29.9)
    Overweight,
    /// BMI 29.9 and above
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal (Healthy)",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Icon glyph shown next to the label
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Underweight | Self::Overweight => "⚠️",
            Self::Normal => "✅",
            Self::Obese => "🚨",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.icon())
    }
}

/// Result of a BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiClassification {
    /// Body-mass index (kg/m²)
    pub bmi: f64,
    /// Category the BMI falls into
    pub category: BmiCategory,
}

impl BmiClassification {
    /// Icon glyph for the category
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

/// Daily energy budget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieBudget {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Daily intake target (kcal/day), never below the configured floor
    pub daily_target: u32,
}

impl CalorieBudget {
    /// Energy shortfall between expenditure and target
    #[must_use]
    pub fn deficit(&self) -> f64 {
        self.tdee - f64::from(self.daily_target)
    }
}

/// Everything the health calculator derives from one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    /// Body-mass index (kg/m²)
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target (kcal/day)
    pub daily_calorie_target: u32,
}

impl HealthMetrics {
    /// Combine a BMI classification and a calorie budget
    #[must_use]
    pub const fn new(bmi: BmiClassification, budget: CalorieBudget) -> Self {
        Self {
            bmi: bmi.bmi,
            bmi_category: bmi.category,
            bmr: budget.bmr,
            tdee: budget.tdee,
            daily_calorie_target: budget.daily_target,
        }
    }

    /// Energy shortfall between TDEE and the daily target
    #[must_use]
    pub fn deficit(&self) -> f64 {
        self.tdee - f64::from(self.daily_calorie_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_match_categories() {
        assert_eq!(BmiCategory::Underweight.icon(), "⚠️");
        assert_eq!(BmiCategory::Normal.icon(), "✅");
        assert_eq!(BmiCategory::Overweight.icon(), "⚠️");
        assert_eq!(BmiCategory::Obese.icon(), "🚨");
    }

    #[test]
    fn test_deficit_from_budget() {
        let budget = CalorieBudget {
            bmr: 1439.0,
            tdee: 1978.625,
            daily_target: 1478,
        };
        assert!((budget.deficit() - 500.625).abs() < 1e-9);

        let metrics = HealthMetrics::new(
            BmiClassification {
                bmi: 29.3,
                category: BmiCategory::Overweight,
            },
            budget,
        );
        assert!((metrics.deficit() - budget.deficit()).abs() < f64::EPSILON);
    }
}
