// ABOUTME: Re-exports the unified error types from smartweight-core
// ABOUTME: Keeps crate::errors paths stable for the application modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smartweight_core::errors::{AppError, AppResult, ErrorCode};
