// ABOUTME: Integration tests for the synthetic trainer and the cached duration model
// ABOUTME: Determinism by seed, shared instance, coefficient sanity and config validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartweight::errors::ErrorCode;
use smartweight_intelligence::{DurationModel, TrainerConfig};

#[test]
fn test_same_seed_same_coefficients() {
    let first = DurationModel::train().unwrap();
    let second = DurationModel::train().unwrap();
    for (a, b) in first.coefficients().iter().zip(second.coefficients()) {
        assert!((a - b).abs() < 1e-9);
    }
    assert!((first.intercept() - second.intercept()).abs() < 1e-9);
}

#[test]
fn test_different_seed_different_fit() {
    let default = DurationModel::train().unwrap();
    let other = DurationModel::train_with(&TrainerConfig::with_seed(7)).unwrap();
    assert_eq!(other.seed(), 7);
    assert!((default.intercept() - other.intercept()).abs() > 1e-9);
}

#[test]
fn test_global_model_is_shared() {
    let first = DurationModel::global().unwrap();
    let second = DurationModel::global().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.samples(), 1000);
}

#[test]
fn test_prediction_behaves_like_energy_balance() {
    let model = DurationModel::global().unwrap();
    let small_deficit = model.predict(90.0, 75.0, 350.0);
    let large_deficit = model.predict(90.0, 75.0, 900.0);
    let small_loss = model.predict(90.0, 85.0, 600.0);
    let large_loss = model.predict(90.0, 65.0, 600.0);

    assert!(small_deficit > large_deficit);
    assert!(large_loss > small_loss);
    assert!(model.r_squared() > 0.5 && model.r_squared() <= 1.0);
}

#[test]
fn test_invalid_trainer_config_rejected() {
    let config = TrainerConfig {
        noise_range: (1.1, 0.9),
        ..TrainerConfig::default()
    };
    let err = DurationModel::train_with(&config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
}
