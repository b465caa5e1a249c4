// ABOUTME: Caller-owned chat state machine with an ordered question/answer transcript
// ABOUTME: Idle -> AwaitingKey -> Ready, and Ready -> Pending -> Ready for every question
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{AdviceRequest, AdviceResponder};
use crate::analysis::AnalysisReport;
use crate::errors::{AppError, AppResult};

/// Where a conversation is in its lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Created, not yet opened
    #[default]
    Idle,
    /// Opened for a responder that needs a key nobody supplied yet
    AwaitingKey,
    /// Accepting questions
    Ready,
    /// A question is being answered
    Pending,
}

impl Display for ConversationState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::AwaitingKey => "awaiting_key",
            Self::Ready => "ready",
            Self::Pending => "pending",
        })
    }
}

/// One question and its answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Question as asked
    pub question: String,
    /// Answer or user-facing failure message
    pub answer: String,
    /// True when `answer` describes a failure
    pub failed: bool,
}

/// Chat session state, owned and threaded through by the caller
#[derive(Clone, Default)]
pub struct Conversation {
    state: ConversationState,
    api_key: Option<String>,
    transcript: Vec<TranscriptEntry>,
}

impl Conversation {
    /// A new idle conversation with an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> ConversationState {
        self.state
    }

    /// Questions and answers in the order they were asked
    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Whether a key has been supplied
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Supply or replace the API key
    ///
    /// An awaiting conversation becomes ready; other states keep their state.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a blank key and `INVALID_STATE`
    /// while a question is pending.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> AppResult<Self> {
        let api_key = api_key.into().trim().to_owned();
        if api_key.is_empty() {
            return Err(AppError::missing_field("api_key"));
        }
        if self.state == ConversationState::Pending {
            return Err(AppError::invalid_state(
                "Cannot change the API key while a question is pending",
            ));
        }
        self.api_key = Some(api_key);
        if self.state == ConversationState::AwaitingKey {
            self.state = ConversationState::Ready;
        }
        Ok(self)
    }

    /// Open the conversation for `responder`
    ///
    /// Becomes `Ready` unless the responder needs a key that has not been
    /// supplied, in which case it waits in `AwaitingKey`.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_STATE` unless the conversation is idle
    pub fn open(mut self, responder: &dyn AdviceResponder) -> AppResult<Self> {
        if self.state != ConversationState::Idle {
            return Err(AppError::invalid_state(format!(
                "Conversation is already open ({})",
                self.state
            )));
        }
        self.state = if responder.requires_api_key() && self.api_key.is_none() {
            ConversationState::AwaitingKey
        } else {
            ConversationState::Ready
        };
        Ok(self)
    }
}

impl Debug for Conversation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversation")
            .field("state", &self.state)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("transcript", &self.transcript)
            .finish()
    }
}

/// Ask one question and return the conversation with the answer appended
///
/// The responder never fails; an answer describing a failure is recorded
/// with `failed` set.
///
/// # Errors
///
/// Returns `INVALID_STATE` unless the conversation is `Ready`, and
/// `INVALID_INPUT` for a blank question.
#[instrument(skip_all, fields(responder = responder.name()))]
pub async fn ask(
    mut conversation: Conversation,
    responder: &dyn AdviceResponder,
    report: &AnalysisReport,
    question: &str,
) -> AppResult<Conversation> {
    if conversation.state != ConversationState::Ready {
        return Err(AppError::invalid_state(format!(
            "Cannot ask a question while the conversation is {}",
            conversation.state
        )));
    }
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::invalid_input("Question must not be empty"));
    }

    conversation.state = ConversationState::Pending;
    let answer = responder
        .respond(&AdviceRequest {
            report,
            question,
            api_key: conversation.api_key.as_deref(),
        })
        .await;

    info!(
        failed = answer.failed,
        entries = conversation.transcript.len() + 1,
        "Question answered"
    );
    conversation.transcript.push(TranscriptEntry {
        question: question.to_owned(),
        answer: answer.text,
        failed: answer.failed,
    });
    conversation.state = ConversationState::Ready;
    Ok(conversation)
}
