// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Input limits, physiological defaults, and synthetic training parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single flat list.

/// Accepted ranges for user-supplied profile values
pub mod limits {
    /// Youngest supported age in years
    pub const MIN_AGE: u32 = 15;
    /// Oldest supported age in years
    pub const MAX_AGE: u32 = 90;
    /// Shortest supported height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest supported height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Lowest supported body weight in kilograms (applies to current and target)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Highest supported body weight in kilograms (applies to current and target)
    pub const MAX_WEIGHT_KG: f64 = 200.0;
}

/// Energy-balance constants
pub mod energy {
    /// Approximate energy content of one kilogram of body fat
    pub const KCAL_PER_KG_FAT: f64 = 7700.0;
    /// Daily deficit subtracted from TDEE to get the calorie target
    pub const DEFAULT_DAILY_DEFICIT_KCAL: f64 = 500.0;
    /// Floor applied to the daily calorie target
    pub const MIN_DAILY_CALORIES: u32 = 1200;
    /// Above this daily target the meal plan switches to large portions
    pub const LARGE_PORTION_THRESHOLD_KCAL: u32 = 1800;
}

/// BMI category boundaries (kg/m²)
pub mod bmi {
    /// Below this value a person is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// From this value on a person is overweight
    pub const OVERWEIGHT_FROM: f64 = 24.9;
    /// From this value on a person is obese
    pub const OBESE_FROM: f64 = 29.9;
}

/// Synthetic training set parameters
pub mod training {
    /// Fixed seed for the synthetic sample
    pub const DEFAULT_SEED: u64 = 42;
    /// Number of synthetic samples
    pub const DEFAULT_SAMPLES: usize = 1000;
    /// Start weight range (kg)
    pub const START_WEIGHT_RANGE: (f64, f64) = (60.0, 120.0);
    /// Weight-loss range subtracted from the start weight (kg)
    pub const WEIGHT_LOSS_RANGE: (f64, f64) = (5.0, 30.0);
    /// Daily deficit range (kcal)
    pub const DEFICIT_RANGE: (f64, f64) = (300.0, 1000.0);
    /// Multiplicative label noise range
    pub const NOISE_RANGE: (f64, f64) = (0.9, 1.1);
}

/// Service identity used in logs
pub mod service_names {
    /// Name of the command line service
    pub const SMARTWEIGHT: &str = "smartweight";
}
