// ABOUTME: Advice responders answering diet questions about an analysis report
// ABOUTME: One async trait with a keyword-table variant and an LLM-backed variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Advice
//!
//! Both responders implement [`AdviceResponder`] and never return an error:
//! a failed LLM call becomes an answer flagged as failed. Misuse of the
//! chat flow (asking before a key is supplied, blank questions) is reported
//! by [`Conversation`] instead.

mod conversation;
mod llm;
mod rules;

pub use conversation::{ask, Conversation, ConversationState, TranscriptEntry};
pub use llm::{render_advice_prompt, LlmAdvisor};
pub use rules::{AdviceTopic, RuleBasedAdvisor};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;
use crate::config::{AdvisorKind, AppConfig};

/// One question about a report
#[derive(Clone, Copy)]
pub struct AdviceRequest<'a> {
    /// Metrics the answer should refer to
    pub report: &'a AnalysisReport,
    /// The user's question
    pub question: &'a str,
    /// API key supplied in the conversation, if any
    pub api_key: Option<&'a str>,
}

/// An answer, possibly describing a failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceAnswer {
    /// Text shown to the user
    pub text: String,
    /// True when the text describes a failure instead of advice
    pub failed: bool,
}

impl AdviceAnswer {
    /// A regular answer
    #[must_use]
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failed: false,
        }
    }

    /// A user-facing failure message
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failed: true,
        }
    }
}

/// Answers diet questions
#[async_trait]
pub trait AdviceResponder: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether an API key must be supplied before questions are accepted
    fn requires_api_key(&self) -> bool;

    /// Answer one question; failures are folded into the answer
    async fn respond(&self, request: &AdviceRequest<'_>) -> AdviceAnswer;
}

/// Build the responder selected by `kind`
#[must_use]
pub fn responder_for(kind: AdvisorKind, config: &AppConfig) -> Box<dyn AdviceResponder> {
    match kind {
        AdvisorKind::Rules => Box::new(RuleBasedAdvisor::new(config.language)),
        AdvisorKind::Llm => Box::new(LlmAdvisor::new(config.llm.clone(), config.language)),
    }
}
