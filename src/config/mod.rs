// ABOUTME: Configuration module loaded from environment variables
// ABOUTME: Advisor selection, answer language, LLM connection settings and trainer seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based application configuration
pub mod environment;

pub use environment::{AdvisorKind, AppConfig, Language, LlmConfig};
