// ABOUTME: Subject profile model with sex, age, weight, height and athletic status
// ABOUTME: Provides string parsing for sex and activity level with form aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Oldest age treated as pediatric (years).
///
/// Ages strictly above this use adult height bounds, adult equations and adult
/// reference tables.
pub const PEDIATRIC_MAX_AGE: f64 = 17.0;

/// Whether an age falls in the pediatric bracket
#[must_use]
pub fn is_pediatric_age(age: f64) -> bool {
    age <= PEDIATRIC_MAX_AGE
}

/// Biological sex used by sex-specific equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Sex {
    /// Lower-case name used in logs and method strings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Indicator used by regression equations (male = 1, female = 0)
    #[must_use]
    pub const fn indicator(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "hombre" | "masculino" => Ok(Self::Male),
            "female" | "f" | "mujer" | "femenino" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))
            .with_field("sex")),
        }
    }
}

/// Self-reported activity level used by the metabolic-age adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 sessions per week
    Light,
    /// 3-5 sessions per week
    Moderate,
    /// Hard training most days
    Intense,
    /// Competitive athlete
    Athlete,
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "sedentario" => Ok(Self::Sedentary),
            "light" | "ligero" => Ok(Self::Light),
            "moderate" | "moderado" => Ok(Self::Moderate),
            "intense" | "intenso" => Ok(Self::Intense),
            "athlete" | "atleta" => Ok(Self::Athlete),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, moderate, intense, athlete"
            ))
            .with_field("activity_level")),
        }
    }
}

/// The validated mandatory part of a request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Self-declared athlete
    pub athlete: bool,
    /// Optional activity level
    pub activity_level: Option<ActivityLevel>,
}

impl SubjectProfile {
    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Body mass index (kg/m²)
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_m();
        self.weight_kg / (height_m * height_m)
    }

    /// Whether the subject is in the pediatric bracket
    #[must_use]
    pub fn is_pediatric(&self) -> bool {
        is_pediatric_age(self.age)
    }

    /// Copy of the profile with a different athlete flag
    #[must_use]
    pub const fn with_athlete(self, athlete: bool) -> Self {
        Self { athlete, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_aliases() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("mujer".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_bmi() {
        let profile = SubjectProfile {
            sex: Sex::Male,
            age: 30.0,
            weight_kg: 80.0,
            height_cm: 200.0,
            athlete: false,
            activity_level: None,
        };
        assert!((profile.bmi() - 20.0).abs() < 1e-12);
    }
}
