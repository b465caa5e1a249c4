// ABOUTME: Environment-based configuration for the SmartWeight CLI
// ABOUTME: Parses SMARTWEIGHT_* and GEMINI_API_KEY variables with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smartweight_core::constants::training;

use crate::errors::{AppError, AppResult};
use crate::utils::http_client::DEFAULT_TIMEOUT_SECS;

/// Default Gemini model
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL
pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Which advice responder answers questions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorKind {
    /// Canned keyword table
    #[default]
    Rules,
    /// Prompt-templated LLM call
    Llm,
}

impl AdvisorKind {
    /// Environment variable for advisor selection
    pub const ENV_VAR: &'static str = "SMARTWEIGHT_ADVISOR";

    /// Parse from string with fallback to `Rules`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "llm" | "ai" | "gemini" => Self::Llm,
            _ => Self::Rules,
        }
    }

    /// String form used on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Llm => "llm",
        }
    }
}

impl Display for AdvisorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvisorKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rules" | "rule" => Ok(Self::Rules),
            "llm" | "ai" | "gemini" => Ok(Self::Llm),
            other => Err(AppError::invalid_input(format!(
                "Unknown advisor '{other}', expected 'rules' or 'llm'"
            ))),
        }
    }
}

/// Language of advice answers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Bahasa Indonesia
    #[serde(rename = "id")]
    Indonesian,
}

impl Language {
    /// Environment variable for answer language
    pub const ENV_VAR: &'static str = "SMARTWEIGHT_LANGUAGE";

    /// Parse from string with fallback to English
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "id" | "indonesian" | "bahasa" | "bahasa indonesia" => Self::Indonesian,
            _ => Self::English,
        }
    }

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Indonesian => "id",
        }
    }

    /// Name of the language as written in an LLM instruction
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Indonesian => "Bahasa Indonesia",
        }
    }
}

/// LLM connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Gemini API key, if configured
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Environment variable for the API key
    pub const API_KEY_ENV_VAR: &'static str = "GEMINI_API_KEY";
    /// Environment variable for the model
    pub const MODEL_ENV_VAR: &'static str = "SMARTWEIGHT_LLM_MODEL";
    /// Environment variable for the base URL
    pub const BASE_URL_ENV_VAR: &'static str = "SMARTWEIGHT_LLM_BASE_URL";
    /// Environment variable for the request timeout
    pub const TIMEOUT_ENV_VAR: &'static str = "SMARTWEIGHT_LLM_TIMEOUT_SECS";

    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the timeout is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        Self {
            api_key: non_empty_var(Self::API_KEY_ENV_VAR),
            model: non_empty_var(Self::MODEL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_owned()),
            base_url: non_empty_var(Self::BASE_URL_ENV_VAR)
                .map_or_else(|| DEFAULT_LLM_BASE_URL.to_owned(), |url| {
                    url.trim_end_matches('/').to_owned()
                }),
            timeout_secs: parse_var(Self::TIMEOUT_ENV_VAR, DEFAULT_TIMEOUT_SECS)?,
        }
        .validated()
    }

    fn validated(self) -> AppResult<Self> {
        if self.timeout_secs == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                Self::TIMEOUT_ENV_VAR
            )));
        }
        Ok(self)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_owned(),
            base_url: DEFAULT_LLM_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default advice responder
    pub advisor: AdvisorKind,
    /// Answer language
    pub language: Language,
    /// LLM connection settings
    pub llm: LlmConfig,
    /// Seed for the synthetic training sample
    pub model_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advisor: AdvisorKind::default(),
            language: Language::default(),
            llm: LlmConfig::default(),
            model_seed: training::DEFAULT_SEED,
        }
    }
}

impl AppConfig {
    /// Environment variable for the trainer seed
    pub const MODEL_SEED_ENV_VAR: &'static str = "SMARTWEIGHT_MODEL_SEED";

    /// Load configuration from environment variables
    ///
    /// Unknown advisor or language names fall back to their defaults;
    /// unparseable numbers are configuration errors.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid timeout or seed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            advisor: non_empty_var(AdvisorKind::ENV_VAR)
                .map(|value| AdvisorKind::from_str_or_default(&value))
                .unwrap_or_default(),
            language: non_empty_var(Language::ENV_VAR)
                .map(|value| Language::from_str_or_default(&value))
                .unwrap_or_default(),
            llm: LlmConfig::from_env()?,
            model_seed: parse_var(Self::MODEL_SEED_ENV_VAR, training::DEFAULT_SEED)?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    non_empty_var(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| AppError::config(format!("Invalid value '{raw}' for {key}: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_parsing() {
        assert_eq!(AdvisorKind::from_str_or_default("LLM"), AdvisorKind::Llm);
        assert_eq!(AdvisorKind::from_str_or_default("other"), AdvisorKind::Rules);
        assert!("magic".parse::<AdvisorKind>().is_err());
        assert_eq!("rules".parse::<AdvisorKind>().ok(), Some(AdvisorKind::Rules));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(Language::from_str_or_default("id"), Language::Indonesian);
        assert_eq!(Language::from_str_or_default("fr"), Language::English);
        assert_eq!(Language::Indonesian.code(), "id");
    }

    #[test]
    fn test_llm_config_debug_redacts_key() {
        let config = LlmConfig {
            api_key: Some("secret-key".into()),
            ..LlmConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
