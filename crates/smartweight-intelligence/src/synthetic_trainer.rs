// ABOUTME: Generates the seeded synthetic weight-loss sample and fits the duration model
// ABOUTME: DurationModel maps (start weight, target weight, daily deficit) to days to goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic Trainer
//!
//! The training sample is procedural: each row draws a start weight, a
//! weight loss and a daily deficit, and labels it with the energy-balance
//! estimate `kg * 7700 / deficit` scaled by a small multiplicative noise.
//! A linear fit over that sample is what the duration estimator uses.
//!
//! Columns are drawn one after another (all start weights, then all losses,
//! then all deficits, then all noise factors) from a `ChaCha8Rng` so the
//! same seed always yields the same coefficients on every platform.

use std::sync::OnceLock;

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smartweight_core::errors::AppResult;
use tracing::{debug, info};

use crate::config::TrainerConfig;
use crate::regression::{self, LinearFit};

/// Number of model features: start weight, target weight, daily deficit
pub const FEATURE_COUNT: usize = 3;

static GLOBAL_MODEL: OnceLock<DurationModel> = OnceLock::new();

/// Fitted linear function from (start kg, target kg, deficit kcal) to days
#[derive(Debug, Clone, PartialEq)]
pub struct DurationModel {
    fit: LinearFit<FEATURE_COUNT>,
    seed: u64,
    samples: usize,
}

impl DurationModel {
    /// Train on the default synthetic sample (1000 rows, seed 42)
    ///
    /// # Errors
    ///
    /// Returns an internal error if the least-squares system is singular,
    /// which the default sample never produces.
    pub fn train() -> AppResult<Self> {
        Self::train_with(&TrainerConfig::default())
    }

    /// Train on a synthetic sample described by `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid ranges and an internal
    /// error if the fitted system is singular.
    pub fn train_with(config: &TrainerConfig) -> AppResult<Self> {
        config.validate()?;
        let (features, labels) = synthetic_sample(config);
        let fit = regression::fit(&features, &labels)?;

        info!(
            seed = config.seed,
            samples = config.samples,
            r_squared = fit.r_squared,
            "Trained duration model"
        );
        debug!(
            intercept = fit.intercept,
            start_weight = fit.coefficients[0],
            target_weight = fit.coefficients[1],
            daily_deficit = fit.coefficients[2],
            "Duration model coefficients"
        );

        Ok(Self {
            fit,
            seed: config.seed,
            samples: config.samples,
        })
    }

    /// Process-wide model trained once with the default configuration
    ///
    /// Every call after the first returns the same instance.
    ///
    /// # Errors
    ///
    /// Propagates a training failure from the first call.
    pub fn global() -> AppResult<&'static Self> {
        if let Some(model) = GLOBAL_MODEL.get() {
            return Ok(model);
        }
        let model = Self::train()?;
        Ok(GLOBAL_MODEL.get_or_init(|| model))
    }

    /// Raw predicted days; may be fractional or negative outside the sample's domain
    #[must_use]
    pub fn predict(&self, start_weight_kg: f64, target_weight_kg: f64, daily_deficit: f64) -> f64 {
        self.fit
            .predict(&[start_weight_kg, target_weight_kg, daily_deficit])
    }

    /// Constant term of the fit
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    /// Coefficients for start weight, target weight and daily deficit
    #[must_use]
    pub const fn coefficients(&self) -> [f64; FEATURE_COUNT] {
        self.fit.coefficients
    }

    /// R² on the training sample
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        self.fit.r_squared
    }

    /// Seed the sample was drawn with
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of training rows
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }
}

/// Draw the feature rows and labels for `config`
///
/// `config` must already be validated; empty ranges would panic in `gen_range`.
fn synthetic_sample(config: &TrainerConfig) -> (Vec<[f64; FEATURE_COUNT]>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut column = |(low, high): (f64, f64)| -> Vec<f64> {
        (0..config.samples).map(|_| rng.gen_range(low..high)).collect()
    };

    let starts = column(config.start_weight_range);
    let losses = column(config.weight_loss_range);
    let deficits = column(config.deficit_range);
    let noise = column(config.noise_range);

    let features: Vec<[f64; FEATURE_COUNT]> = starts
        .iter()
        .zip(&losses)
        .zip(&deficits)
        .map(|((start, loss), deficit)| [*start, start - loss, *deficit])
        .collect();
    let labels = features
        .iter()
        .zip(&noise)
        .map(|([start, target, deficit], factor)| {
            (start - target) * config.kcal_per_kg / deficit * factor
        })
        .collect();

    (features, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_respects_ranges() {
        let config = TrainerConfig {
            samples: 200,
            ..TrainerConfig::default()
        };
        let (features, labels) = synthetic_sample(&config);
        assert_eq!(features.len(), 200);
        assert_eq!(labels.len(), 200);
        for ([start, target, deficit], label) in features.iter().zip(&labels) {
            assert!((60.0..120.0).contains(start));
            let loss = start - target;
            assert!(loss > 5.0 - 1e-9 && loss < 30.0 + 1e-9);
            assert!((300.0..1000.0).contains(deficit));
            assert!(*label > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let config = TrainerConfig::with_seed(9);
        assert_eq!(synthetic_sample(&config), synthetic_sample(&config));
        assert_ne!(
            synthetic_sample(&config).1,
            synthetic_sample(&TrainerConfig::with_seed(10)).1
        );
    }

    #[test]
    fn test_trained_model_signs() {
        let model = DurationModel::train().unwrap();
        let [start, target, deficit] = model.coefficients();
        // more weight to lose means more days; a bigger deficit means fewer
        assert!(start > 0.0);
        assert!(target < 0.0);
        assert!(deficit < 0.0);
        assert!(model.r_squared() > 0.5);
        assert_eq!(model.seed(), 42);
        assert_eq!(model.samples(), 1000);
    }
}
