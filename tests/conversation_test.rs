// ABOUTME: Integration tests for the caller-owned conversation state machine
// ABOUTME: State transitions, ordered transcript, failed entries and misuse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartweight::advice::{ask, Conversation, ConversationState, LlmAdvisor, RuleBasedAdvisor};
use smartweight::config::{Language, LlmConfig};
use smartweight::errors::ErrorCode;

mod common;

#[tokio::test]
async fn test_transcript_keeps_order() {
    let report = common::sample_report();
    let advisor = RuleBasedAdvisor::new(Language::English);
    let mut conversation = Conversation::new().open(&advisor).unwrap();

    for question in ["fried food?", "exercise?", "hungry", "sleep?"] {
        conversation = ask(conversation, &advisor, &report, question).await.unwrap();
        assert_eq!(conversation.state(), ConversationState::Ready);
    }

    let questions: Vec<&str> = conversation
        .transcript()
        .iter()
        .map(|entry| entry.question.as_str())
        .collect();
    assert_eq!(questions, ["fried food?", "exercise?", "hungry", "sleep?"]);
    assert!(conversation.transcript().iter().all(|entry| !entry.failed));
}

#[tokio::test]
async fn test_ask_before_open_is_invalid_state() {
    let report = common::sample_report();
    let advisor = RuleBasedAdvisor::new(Language::English);
    let err = ask(Conversation::new(), &advisor, &report, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);
}

#[tokio::test]
async fn test_ask_while_awaiting_key_is_invalid_state() {
    let report = common::sample_report();
    let advisor = LlmAdvisor::new(LlmConfig::default(), Language::English);
    let conversation = Conversation::new().open(&advisor).unwrap();
    assert_eq!(conversation.state(), ConversationState::AwaitingKey);

    let err = ask(conversation, &advisor, &report, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);
}

#[tokio::test]
async fn test_blank_question_rejected() {
    let report = common::sample_report();
    let advisor = RuleBasedAdvisor::new(Language::English);
    let conversation = Conversation::new().open(&advisor).unwrap();
    let err = ask(conversation, &advisor, &report, "   ")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_failed_llm_answer_is_recorded() {
    let report = common::sample_report();
    let advisor = LlmAdvisor::new(
        LlmConfig {
            base_url: "http://127.0.0.1:1".to_owned(),
            timeout_secs: 5,
            ..LlmConfig::default()
        },
        Language::English,
    );
    let conversation = Conversation::new()
        .with_api_key("test-key")
        .unwrap()
        .open(&advisor)
        .unwrap();
    assert_eq!(conversation.state(), ConversationState::Ready);

    let conversation = ask(conversation, &advisor, &report, "Is bread ok?")
        .await
        .unwrap();
    assert_eq!(conversation.state(), ConversationState::Ready);
    let entry = &conversation.transcript()[0];
    assert_eq!(entry.question, "Is bread ok?");
    assert!(entry.failed);
    assert!(entry.answer.starts_with("⚠️"));
}
