// ABOUTME: User profile value record with sex and activity level enumerations
// ABOUTME: Parses English and Indonesian labels and validates input ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "laki-laki" => Ok(Self::Male),
            "female" | "f" | "woman" | "perempuan" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex '{other}', expected male or female"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly activity level, numbered 1 through 5
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Rarely moves (level 1)
    Sedentary,
    /// Exercise 1-3 times a week (level 2)
    LightlyActive,
    /// Exercise 3-5 times a week (level 3)
    ModeratelyActive,
    /// Exercise 6-7 times a week (level 4)
    VeryActive,
    /// Athlete (level 5)
    Athlete,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::Athlete,
    ];

    /// Numeric level (1-5)
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Sedentary => 1,
            Self::LightlyActive => 2,
            Self::ModeratelyActive => 3,
            Self::VeryActive => 4,
            Self::Athlete => 5,
        }
    }

    /// Strict conversion from the numeric level
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Sedentary),
            2 => Some(Self::LightlyActive),
            3 => Some(Self::ModeratelyActive),
            4 => Some(Self::VeryActive),
            5 => Some(Self::Athlete),
            _ => None,
        }
    }

    /// Lenient conversion; unknown levels fall back to sedentary (multiplier 1.2)
    #[must_use]
    pub const fn from_level_or_default(level: u8) -> Self {
        match Self::from_level(level) {
            Some(activity) => activity,
            None => Self::Sedentary,
        }
    }

    /// English display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Light (1-3x/week)",
            Self::ModeratelyActive => "Moderate (3-5x/week)",
            Self::VeryActive => "Active (6-7x/week)",
            Self::Athlete => "Athlete",
        }
    }

    /// Parse a label, a short English keyword, or the numeric level
    ///
    /// The Indonesian labels (`Sangat Jarang` through `Atlet`) are accepted too.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        if let Ok(level) = normalized.parse::<u8>() {
            return Self::from_level(level);
        }
        match normalized.as_str() {
            "sedentary" | "sangat jarang" => Some(Self::Sedentary),
            "light" | "lightly_active" | "jarang (1-3x)" => Some(Self::LightlyActive),
            "moderate" | "moderately_active" | "sedang (3-5x)" => Some(Self::ModeratelyActive),
            "active" | "very_active" | "aktif (6-7x)" => Some(Self::VeryActive),
            "athlete" | "atlet" => Some(Self::Athlete),
            _ => Self::ALL
                .into_iter()
                .find(|level| level.label().to_lowercase() == normalized),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown activity level '{s}', expected 1-5 or sedentary/light/moderate/active/athlete"
            ))
        })
    }
}

/// Inputs for one analysis run
///
/// Recreated for every analysis; nothing downstream mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Current body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Weekly activity level
    pub activity_level: ActivityLevel,
    /// Goal body weight (kg)
    pub target_weight_kg: f64,
}

impl UserProfile {
    /// Check every field against the accepted input ranges
    ///
    /// The calculators assume valid input; call this at the boundary where raw
    /// values enter the system.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for the first field outside its range and
    /// `MissingRequiredField` when the name is blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age",
                f64::from(self.age),
                f64::from(limits::MIN_AGE),
                f64::from(limits::MAX_AGE),
            ));
        }
        check_range(
            "height_cm",
            self.height_cm,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM,
        )?;
        check_range(
            "weight_kg",
            self.weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
        )?;
        check_range(
            "target_weight_kg",
            self.target_weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
        )
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    // NaN fails the contains check as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}
