// ABOUTME: Keyword-table advice responder with English and Indonesian keywords
// ABOUTME: Ordered (keywords, topic) rules matched as substrings; the first matching rule wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdviceAnswer, AdviceRequest, AdviceResponder};
use crate::config::Language;

/// What a question is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTopic {
    /// Fried food or cooking oil
    FriedFood,
    /// Physical activity
    Exercise,
    /// Hunger between meals
    Hunger,
    /// Anything else
    General,
}

impl AdviceTopic {
    /// Canned answer for this topic
    #[must_use]
    pub const fn answer(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::FriedFood, Language::English) => {
                "Best to avoid fried food. If you really crave it, limit it to one piece a week or use an air fryer."
            }
            (Self::FriedFood, Language::Indonesian) => {
                "Sebaiknya hindari gorengan. Jika sangat ingin, batasi 1 buah per minggu atau gunakan Air Fryer."
            }
            (Self::Exercise, Language::English) => {
                "For your BMI, a 30-minute brisk walk every morning is highly recommended."
            }
            (Self::Exercise, Language::Indonesian) => {
                "Untuk BMI Anda, jalan cepat 30 menit setiap pagi sangat disarankan."
            }
            (Self::Hunger, Language::English) => {
                "If you get hungry outside mealtimes, drink a glass of water or eat some cut fruit."
            }
            (Self::Hunger, Language::Indonesian) => {
                "Jika lapar di luar jam makan, minumlah segelas air putih atau makan buah potong."
            }
            (Self::General, Language::English) => {
                "Good question! Make sure you stay consistent with your calorie deficit and get enough sleep."
            }
            (Self::General, Language::Indonesian) => {
                "Pertanyaan bagus! Pastikan Anda tetap konsisten dengan defisit kalori dan tidur yang cukup."
            }
        }
    }
}

/// Keywords that select a topic; matched anywhere in the question
struct AdviceRule {
    topic: AdviceTopic,
    keywords: &'static [&'static str],
}

/// Evaluated in order; the first rule with a matching keyword wins
const RULES: &[AdviceRule] = &[
    AdviceRule {
        topic: AdviceTopic::FriedFood,
        keywords: &["fried", "fries", "fry", "oily", "goreng", "minyak"],
    },
    AdviceRule {
        topic: AdviceTopic::Exercise,
        keywords: &["exercis", "workout", "work out", "olahraga", "senam", "gym", "jogging"],
    },
    AdviceRule {
        topic: AdviceTopic::Hunger,
        keywords: &["hungry", "hunger", "starving", "lapar"],
    },
];

/// Classify a question by the first matching rule
///
/// Matching is a case-insensitive substring test, so affixed Indonesian
/// forms such as "berolahraga" and "kelaparan" match their root keyword.
/// The oil keyword is "oily" because a bare "oil" would also match "boiled".
#[must_use]
pub fn classify_question(question: &str) -> AdviceTopic {
    let lowered = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(AdviceTopic::General, |rule| rule.topic)
}

/// Canned keyword-table advisor
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAdvisor {
    language: Language,
}

impl RuleBasedAdvisor {
    /// Advisor answering in `language`
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Answer text for a question
    #[must_use]
    pub fn answer(&self, question: &str) -> &'static str {
        classify_question(question).answer(self.language)
    }
}

#[async_trait]
impl AdviceResponder for RuleBasedAdvisor {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn respond(&self, request: &AdviceRequest<'_>) -> AdviceAnswer {
        let topic = classify_question(request.question);
        debug!(?topic, "Rule-based advice");
        AdviceAnswer::answered(topic.answer(self.language))
    }
}
