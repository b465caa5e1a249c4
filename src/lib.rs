// ABOUTME: Main library entry point for the SmartWeight wellness calculator
// ABOUTME: Wires the analysis pipeline, advice responders, LLM provider, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartWeight
//!
//! A single-user wellness calculator. Given a person's demographics and
//! activity level it computes body-mass index, basal and total energy
//! expenditure, a daily calorie target and a time-to-goal estimate from a
//! regression fitted on synthetic data, then answers diet questions with a
//! keyword table or an LLM.
//!
//! ## Architecture
//!
//! - **`smartweight_core`**: errors, constants and value records
//! - **`smartweight_intelligence`**: calculator, trainer, estimator, meal planner
//! - **analysis**: runs the pipeline for one profile into an `AnalysisReport`
//! - **advice**: `AdviceResponder` variants and the caller-owned `Conversation`
//! - **llm**: provider abstraction and the Gemini provider
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smartweight::analysis::analyze;
//! use smartweight::errors::AppResult;
//! use smartweight::models::{ActivityLevel, Sex, UserProfile};
//! use smartweight_intelligence::{CalorieConfig, DurationModel};
//!
//! fn main() -> AppResult<()> {
//!     let profile = UserProfile {
//!         name: "Sari".into(),
//!         age: 30,
//!         sex: Sex::Female,
//!         weight_kg: 75.0,
//!         height_cm: 160.0,
//!         activity_level: ActivityLevel::LightlyActive,
//!         target_weight_kg: 65.0,
//!     };
//!     let report = analyze(profile, DurationModel::global()?, &CalorieConfig::default())?;
//!     println!("{} kcal/day", report.metrics.daily_calorie_target);
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Value records re-exported from the core crate
pub mod models {
    pub use smartweight_core::models::*;
}

/// Constants re-exported from the core crate
pub mod constants {
    pub use smartweight_core::constants::*;
}

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP client helpers
pub mod utils;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Analysis pipeline for one profile
pub mod analysis;

/// Advice responders and conversation state
pub mod advice;
