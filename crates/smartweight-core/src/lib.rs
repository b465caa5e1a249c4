// ABOUTME: Core types and constants for the SmartWeight wellness calculator
// ABOUTME: Foundation crate with error handling, input limits, and value records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartWeight Core
//!
//! Foundation crate shared by the intelligence engine and the application
//! crate. It changes rarely, which keeps incremental builds of the workspace
//! cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: input limits, energy constants, BMI boundaries, training parameters
//! - **models**: `UserProfile`, `HealthMetrics`, `DurationEstimate`, `MealPlan`

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Immutable value records for one analysis run
pub mod models;
