// ABOUTME: Tunable coefficients for the calorie calculator and the synthetic trainer
// ABOUTME: Defaults reproduce Mifflin-St Jeor, standard activity factors, and the seed-42 sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use smartweight_core::constants::{energy, training};
use smartweight_core::errors::{AppError, AppResult};
use smartweight_core::models::{ActivityLevel, Sex};

/// BMR (Basal Metabolic Rate) coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn constant_for(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_constant,
            Sex::Female => self.female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Level 1: 1.2
    pub sedentary: f64,
    /// Level 2: 1.375
    pub lightly_active: f64,
    /// Level 3: 1.55
    pub moderately_active: f64,
    /// Level 4: 1.725
    pub very_active: f64,
    /// Level 5: 1.9
    pub athlete: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Athlete => self.athlete,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            athlete: 1.9,
        }
    }
}

/// Everything the calorie calculator needs besides the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit subtracted from TDEE (kcal/day)
    pub daily_deficit_kcal: f64,
    /// Lowest daily target ever recommended (kcal/day)
    pub min_daily_calories: u32,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            daily_deficit_kcal: energy::DEFAULT_DAILY_DEFICIT_KCAL,
            min_daily_calories: energy::MIN_DAILY_CALORIES,
        }
    }
}

/// Synthetic sample generation parameters
///
/// Ranges are half-open `[low, high)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrainerConfig {
    /// RNG seed; the same seed reproduces the same coefficients
    pub seed: u64,
    /// Number of synthetic samples
    pub samples: usize,
    /// Start weight range (kg)
    pub start_weight_range: (f64, f64),
    /// Kilograms to lose, subtracted from the start weight
    pub weight_loss_range: (f64, f64),
    /// Daily deficit range (kcal)
    pub deficit_range: (f64, f64),
    /// Multiplicative noise applied to each label
    pub noise_range: (f64, f64),
    /// Energy per kilogram of body weight lost
    pub kcal_per_kg: f64,
}

impl TrainerConfig {
    /// Default parameters with a different seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject parameters that cannot produce a well-posed fit
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty or non-finite ranges, a
    /// non-positive deficit range, or fewer samples than unknowns.
    pub fn validate(&self) -> AppResult<()> {
        // intercept plus three coefficients
        if self.samples < 4 {
            return Err(AppError::config(format!(
                "Trainer needs at least 4 samples, got {}",
                self.samples
            )));
        }
        for (name, (low, high)) in [
            ("start_weight_range", self.start_weight_range),
            ("weight_loss_range", self.weight_loss_range),
            ("deficit_range", self.deficit_range),
            ("noise_range", self.noise_range),
        ] {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(AppError::config(format!(
                    "{name} must be a finite range with low < high, got [{low}, {high})"
                )));
            }
        }
        if self.deficit_range.0 <= 0.0 {
            return Err(AppError::config("deficit_range must be strictly positive"));
        }
        if !(self.kcal_per_kg.is_finite() && self.kcal_per_kg > 0.0) {
            return Err(AppError::config("kcal_per_kg must be positive"));
        }
        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            seed: training::DEFAULT_SEED,
            samples: training::DEFAULT_SAMPLES,
            start_weight_range: training::START_WEIGHT_RANGE,
            weight_loss_range: training::WEIGHT_LOSS_RANGE,
            deficit_range: training::DEFICIT_RANGE,
            noise_range: training::NOISE_RANGE,
            kcal_per_kg: energy::KCAL_PER_KG_FAT,
        }
    }
}
