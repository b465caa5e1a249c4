// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the diet advisor instruction block used by the LLM advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Diet advisor system prompt
///
/// Contains the role, tone and safety rules; the per-question metrics block
/// is rendered separately by the advisor.
pub const ADVISOR_SYSTEM_PROMPT: &str = include_str!("advisor_system.md");

/// Get the diet advisor system prompt
#[must_use]
pub const fn get_advisor_system_prompt() -> &'static str {
    ADVISOR_SYSTEM_PROMPT
}
