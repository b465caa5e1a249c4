// ABOUTME: Command line front end for the SmartWeight wellness calculator
// ABOUTME: `analyze` prints the report as text or JSON, `ask` answers diet questions about it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! smartweight analyze --name Sari --sex female --age 30 --height 160 \
//!     --weight 75 --target 65 --activity 2
//!
//! smartweight ask --name Sari --sex female --age 30 --height 160 \
//!     --weight 75 --target 65 --activity light --advisor llm --api-key "$KEY" \
//!     "Can I eat fried food?" "What exercise suits me?"
//! ```

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use smartweight::advice::{ask, responder_for, Conversation, ConversationState};
use smartweight::analysis::{analyze, AnalysisReport};
use smartweight::config::{AdvisorKind, AppConfig, Language};
use smartweight::logging::LoggingConfig;
use smartweight::models::{ActivityLevel, Sex, UserProfile};
use smartweight_intelligence::{CalorieConfig, DurationModel, TrainerConfig};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "smartweight",
    version,
    about = "BMI, calorie budget and time-to-goal estimates with diet advice",
    long_about = "Computes BMI, BMR, TDEE and a daily calorie target for a profile, estimates the time \
                  to reach a target weight with a regression model trained on synthetic data, and \
                  answers diet questions with a keyword table or the Gemini API."
)]
struct SmartWeightArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute metrics, time to goal and a meal plan
    Analyze {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze, then answer each question in order
    Ask {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Advice responder (defaults to SMARTWEIGHT_ADVISOR, then rules)
        #[arg(long)]
        advisor: Option<AdvisorKind>,

        /// Gemini API key (defaults to GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Answer language: en or id (defaults to SMARTWEIGHT_LANGUAGE)
        #[arg(long)]
        language: Option<String>,

        /// Questions to ask
        #[arg(required = true)]
        questions: Vec<String>,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// male or female (laki-laki / perempuan also accepted)
    #[arg(long)]
    sex: Sex,

    /// Age in years (15-90)
    #[arg(long)]
    age: u32,

    /// Height in centimeters (100-250)
    #[arg(long)]
    height: f64,

    /// Current weight in kilograms (30-200)
    #[arg(long)]
    weight: f64,

    /// Target weight in kilograms (30-200)
    #[arg(long)]
    target: f64,

    /// Activity level: 1-5, sedentary/light/moderate/active/athlete
    #[arg(long, default_value = "2")]
    activity: ActivityLevel,
}

impl ProfileArgs {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name,
            age: self.age,
            sex: self.sex,
            weight_kg: self.weight,
            height_cm: self.height,
            activity_level: self.activity,
            target_weight_kg: self.target,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SmartWeightArgs::parse();
    LoggingConfig::from_env().init()?;
    let config = AppConfig::from_env()?;
    info!(advisor = %config.advisor, language = config.language.code(), "Configuration loaded");

    let custom_model;
    let model: &DurationModel = if config.model_seed == TrainerConfig::default().seed {
        DurationModel::global()?
    } else {
        custom_model = DurationModel::train_with(&TrainerConfig::with_seed(config.model_seed))?;
        &custom_model
    };

    match args.command {
        Command::Analyze { profile, json } => {
            let report = analyze(profile.into_profile(), model, &CalorieConfig::default())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Ask {
            profile,
            advisor,
            api_key,
            language,
            questions,
        } => {
            let mut config = config;
            if let Some(language) = language {
                config.language = Language::from_str_or_default(&language);
            }
            let report = analyze(profile.into_profile(), model, &CalorieConfig::default())?;
            run_questions(&config, advisor, api_key, &report, &questions).await?;
        }
    }

    Ok(())
}

async fn run_questions(
    config: &AppConfig,
    advisor: Option<AdvisorKind>,
    api_key: Option<String>,
    report: &AnalysisReport,
    questions: &[String],
) -> Result<()> {
    let responder = responder_for(advisor.unwrap_or(config.advisor), config);

    let mut conversation = Conversation::new();
    if let Some(key) = api_key.or_else(|| config.llm.api_key.clone()) {
        conversation = conversation.with_api_key(key)?;
    }
    conversation = conversation.open(responder.as_ref())?;
    if conversation.state() == ConversationState::AwaitingKey {
        bail!("The LLM advisor needs an API key: pass --api-key or set GEMINI_API_KEY");
    }

    for question in questions {
        conversation = ask(conversation, responder.as_ref(), report, question).await?;
    }

    print_report(report);
    println!();
    println!("Diet questions");
    for entry in conversation.transcript() {
        println!();
        println!("Q: {}", entry.question);
        println!("A: {}", entry.answer);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let AnalysisReport {
        profile,
        metrics,
        estimate,
        meal_plan,
    } = report;

    println!("Hello, {}!", profile.name);
    println!();
    println!(
        "BMI:                  {:.1} ({} {})",
        metrics.bmi,
        metrics.bmi_category.label(),
        metrics.bmi_category.icon()
    );
    println!("BMR:                  {:.0} kcal", metrics.bmr);
    println!("TDEE:                 {:.0} kcal", metrics.tdee);
    println!(
        "Daily calorie target: {} kcal",
        metrics.daily_calorie_target
    );
    println!(
        "Time to {:.1} kg:      {} days ({:.1} weeks)",
        profile.target_weight_kg, estimate.days, estimate.weeks
    );
    println!();
    println!("Weekly trajectory");
    for point in &estimate.trajectory {
        println!("  week {:>3}: {:.1} kg", point.week, point.weight_kg);
    }
    println!();
    println!("Meal plan ({})", meal_plan.portion.label());
    for meal in &meal_plan.meals {
        println!("  {}: {}", meal.slot.label(), meal.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartweight::errors::AppResult;

    const PROFILE: &[&str] = &[
        "--name", "Sari", "--sex", "perempuan", "--age", "30", "--height", "160", "--weight",
        "75", "--target", "65",
    ];

    fn parse(command: &str, extra: &[&str]) -> SmartWeightArgs {
        let args = ["smartweight", command]
            .into_iter()
            .chain(PROFILE.iter().copied())
            .chain(extra.iter().copied());
        SmartWeightArgs::try_parse_from(args).unwrap()
    }

    fn sample_report() -> AppResult<AnalysisReport> {
        let Command::Analyze { profile, .. } = parse("analyze", &[]).command else {
            panic!("expected analyze");
        };
        analyze(
            profile.into_profile(),
            DurationModel::global()?,
            &CalorieConfig::default(),
        )
    }

    #[test]
    fn test_analyze_accepts_indonesian_labels() {
        let args = parse("analyze", &["--activity", "Sedang (3-5x)", "--json"]);
        let Command::Analyze { profile, json } = args.command else {
            panic!("expected analyze");
        };
        assert!(json);
        let profile = profile.into_profile();
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
        assert!((profile.height_cm - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_activity_defaults_to_lightly_active() {
        let Command::Analyze { profile, json } = parse("analyze", &[]).command else {
            panic!("expected analyze");
        };
        assert!(!json);
        assert_eq!(profile.into_profile().activity_level, ActivityLevel::LightlyActive);
    }

    #[test]
    fn test_ask_parses_advisor_and_questions() {
        let args = parse(
            "ask",
            &["--advisor", "llm", "--language", "id", "Boleh gorengan?", "Olahraga apa?"],
        );
        let Command::Ask {
            advisor,
            api_key,
            language,
            questions,
            ..
        } = args.command
        else {
            panic!("expected ask");
        };
        assert_eq!(advisor, Some(AdvisorKind::Llm));
        assert_eq!(api_key, None);
        assert_eq!(language.as_deref(), Some("id"));
        assert_eq!(questions, ["Boleh gorengan?", "Olahraga apa?"]);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let bad_sex = [
            "smartweight", "analyze", "--name", "X", "--sex", "robot", "--age", "30", "--height",
            "160", "--weight", "75", "--target", "65",
        ];
        assert!(SmartWeightArgs::try_parse_from(bad_sex).is_err());
        // ask needs at least one question
        let no_question = ["smartweight", "ask"]
            .into_iter()
            .chain(PROFILE.iter().copied());
        assert!(SmartWeightArgs::try_parse_from(no_question).is_err());
    }

    #[tokio::test]
    async fn test_llm_advisor_without_key_is_refused() {
        let report = sample_report().unwrap();
        let config = AppConfig::default();
        assert!(config.llm.api_key.is_none());

        let err = run_questions(
            &config,
            Some(AdvisorKind::Llm),
            None,
            &report,
            &["Boleh gorengan?".to_owned()],
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("needs an API key"));
    }

    #[tokio::test]
    async fn test_rules_advisor_answers_without_key() {
        let report = sample_report().unwrap();
        let result = run_questions(
            &AppConfig::default(),
            None,
            None,
            &report,
            &["Is fried food ok?".to_owned()],
        )
        .await;
        assert!(result.is_ok());
    }
}
