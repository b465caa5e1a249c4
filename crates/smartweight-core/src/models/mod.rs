// ABOUTME: Value records passed between the calculator, estimator, and advisor stages
// ABOUTME: Re-exports UserProfile, HealthMetrics, DurationEstimate, MealPlan and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every stage of an analysis takes immutable records and returns new ones;
//! nothing is updated in place once produced.

mod health;
mod plan;
mod profile;

pub use health::{BmiCategory, BmiClassification, CalorieBudget, HealthMetrics};
pub use plan::{DurationEstimate, MealPlan, MealSlot, MealSuggestion, PortionSize, TrajectoryPoint};
pub use profile::{ActivityLevel, Sex, UserProfile};
