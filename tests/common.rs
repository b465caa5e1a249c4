// ABOUTME: Shared test utilities for SmartWeight integration tests
// ABOUTME: Sample profiles, quiet logging, and in-memory LLM providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `smartweight`

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use smartweight::analysis::{analyze, AnalysisReport};
use smartweight::errors::{AppError, ErrorCode};
use smartweight::llm::{ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use smartweight::models::{ActivityLevel, Sex, UserProfile};
use smartweight_intelligence::{CalorieConfig, DurationModel};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Female, 30 years, 160 cm, 75 kg aiming for 65 kg, lightly active
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Sari".to_owned(),
        age: 30,
        sex: Sex::Female,
        weight_kg: 75.0,
        height_cm: 160.0,
        activity_level: ActivityLevel::LightlyActive,
        target_weight_kg: 65.0,
    }
}

/// Report for `sample_profile` using the shared model
pub fn sample_report() -> AnalysisReport {
    init_test_logging();
    analyze(
        sample_profile(),
        DurationModel::global().unwrap(),
        &CalorieConfig::default(),
    )
    .unwrap()
}

/// Provider that always fails with the given error code
pub struct FailingProvider {
    pub code: ErrorCode,
}

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::new(self.code, "simulated outage"))
    }
}

/// Provider that answers with a fixed reply and remembers the last request
pub struct RecordingProvider {
    pub reply: String,
    pub last_request: Mutex<Option<ChatRequest>>,
}

impl RecordingProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> ChatRequest {
        self.last_request.lock().unwrap().clone().unwrap()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: request.model.clone().unwrap_or_else(|| "recorded".to_owned()),
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            finish_reason: Some("STOP".to_owned()),
        })
    }
}
