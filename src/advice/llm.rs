// ABOUTME: LLM-backed advice responder rendering the report into a prompt for Gemini
// ABOUTME: Every provider failure becomes a flagged, user-facing answer instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{AdviceAnswer, AdviceRequest, AdviceResponder};
use crate::analysis::AnalysisReport;
use crate::config::{Language, LlmConfig};
use crate::errors::{AppError, ErrorCode};
use crate::llm::prompts::get_advisor_system_prompt;
use crate::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};

/// Sampling temperature for advice answers
const ADVICE_TEMPERATURE: f32 = 0.7;

/// Advisor that forwards questions to an LLM
#[derive(Debug, Clone)]
pub struct LlmAdvisor {
    config: LlmConfig,
    language: Language,
}

impl LlmAdvisor {
    /// Advisor using `config` for the Gemini connection
    #[must_use]
    pub const fn new(config: LlmConfig, language: Language) -> Self {
        Self { config, language }
    }

    /// Chat request for one question
    #[must_use]
    pub fn build_request(&self, report: &AnalysisReport, question: &str) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(get_advisor_system_prompt()),
            ChatMessage::user(render_advice_prompt(report, question, self.language)),
        ])
        .with_model(self.config.model.clone())
        .with_temperature(ADVICE_TEMPERATURE)
    }

    /// Ask `provider` and fold any failure into the answer
    #[instrument(skip_all, fields(provider = provider.name()))]
    pub async fn respond_with(
        &self,
        provider: &dyn LlmProvider,
        report: &AnalysisReport,
        question: &str,
    ) -> AdviceAnswer {
        let request = self.build_request(report, question);
        match provider.complete(&request).await {
            Ok(response) => {
                info!(
                    model = %response.model,
                    total_tokens = response.usage.map(|usage| usage.total_tokens),
                    finish_reason = response.finish_reason.as_deref(),
                    "LLM advice received"
                );
                AdviceAnswer::answered(response.content)
            }
            Err(error) => {
                warn!(code = ?error.code, error = %error, "LLM advice failed");
                AdviceAnswer::failure(failure_text(&error, self.language))
            }
        }
    }
}

#[async_trait]
impl AdviceResponder for LlmAdvisor {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn requires_api_key(&self) -> bool {
        true
    }

    async fn respond(&self, request: &AdviceRequest<'_>) -> AdviceAnswer {
        let api_key = request
            .api_key
            .or(self.config.api_key.as_deref())
            .map(str::trim)
            .filter(|key| !key.is_empty());

        let Some(api_key) = api_key else {
            let error = AppError::new(ErrorCode::ConfigMissing, "No Gemini API key supplied");
            return AdviceAnswer::failure(failure_text(&error, self.language));
        };

        let provider = GeminiProvider::from_config(&self.config, api_key);
        self.respond_with(&provider, request.report, request.question)
            .await
    }
}

fn failure_text(error: &AppError, language: Language) -> String {
    match language {
        Language::English => format!("⚠️ Error contacting the AI advisor: {error}"),
        Language::Indonesian => format!("⚠️ Terjadi kesalahan saat menghubungi AI: {error}"),
    }
}

/// Prompt embedding every computed metric, the instruction block and the question
#[must_use]
pub fn render_advice_prompt(report: &AnalysisReport, question: &str, language: Language) -> String {
    let AnalysisReport {
        profile,
        metrics,
        estimate,
        meal_plan,
    } = report;

    let mut prompt = String::with_capacity(1024);
    // writing to a String cannot fail
    let _ = writeln!(prompt, "Client profile:");
    let _ = writeln!(prompt, "- Name: {}", profile.name);
    let _ = writeln!(prompt, "- Age: {} years, {}", profile.age, profile.sex);
    let _ = writeln!(prompt, "- Height: {:.1} cm", profile.height_cm);
    let _ = writeln!(prompt, "- Current weight: {:.1} kg", profile.weight_kg);
    let _ = writeln!(prompt, "- Target weight: {:.1} kg", profile.target_weight_kg);
    let _ = writeln!(
        prompt,
        "- Activity level: {} ({}/5)",
        profile.activity_level.label(),
        profile.activity_level.level()
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Computed metrics:");
    let _ = writeln!(
        prompt,
        "- BMI: {:.1} ({} {})",
        metrics.bmi,
        metrics.bmi_category.label(),
        metrics.bmi_category.icon()
    );
    let _ = writeln!(prompt, "- BMR: {:.0} kcal/day", metrics.bmr);
    let _ = writeln!(prompt, "- TDEE: {:.0} kcal/day", metrics.tdee);
    let _ = writeln!(
        prompt,
        "- Daily calorie target: {} kcal/day (deficit {:.0} kcal)",
        metrics.daily_calorie_target,
        metrics.deficit()
    );
    let _ = writeln!(
        prompt,
        "- Estimated time to goal: {} days (about {:.1} weeks)",
        estimate.days, estimate.weeks
    );
    let _ = writeln!(prompt, "- Suggested portion size: {}", meal_plan.portion.label());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Instructions:");
    let _ = writeln!(
        prompt,
        "- Answer warmly and encouragingly, in {}.",
        language.display_name()
    );
    let _ = writeln!(prompt, "- Refer to the metrics above where relevant.");
    let _ = writeln!(
        prompt,
        "- If you propose menus, size them to {} kcal per day.",
        metrics.daily_calorie_target
    );
    let _ = writeln!(prompt);
    let _ = write!(prompt, "Question: {}", question.trim());
    prompt
}
