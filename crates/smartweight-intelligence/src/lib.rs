// ABOUTME: Health arithmetic, synthetic training, and time-to-goal estimation for SmartWeight
// ABOUTME: Pure algorithms with no I/O, shared by the CLI and the advice layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartWeight Intelligence
//!
//! Data flows one way through this crate:
//!
//! 1. [`health_calculator`] turns a profile into BMI and a calorie budget
//! 2. [`synthetic_trainer`] fits the duration model once per process
//! 3. [`duration_estimator`] feeds the budget into the model
//! 4. [`meal_planner`] sizes a daily plan to the calorie target

/// Coefficient and sampling configuration
pub mod config;

/// BMI classification and calorie budget
pub mod health_calculator;

/// Least-squares fitting
pub mod regression;

/// Seeded synthetic sample and the fitted duration model
pub mod synthetic_trainer;

/// Days and weekly trajectory to the target weight
pub mod duration_estimator;

/// Daily meal plan
pub mod meal_planner;

pub use config::{ActivityFactorsConfig, BmrConfig, CalorieConfig, TrainerConfig};
pub use duration_estimator::estimate_duration;
pub use health_calculator::{classify_bmi, compute_calories, compute_metrics};
pub use meal_planner::plan_meals;
pub use synthetic_trainer::DurationModel;
