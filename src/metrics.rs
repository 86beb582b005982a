//! Health metric calculators: BMR, calorie targets, macro split, BMI.
//!
//! Pure stateless arithmetic. The diet planner validates a
//! [`UserHealthProfile`] with these before anything touches the network.

use crate::error::{CompanionError, Result};
use serde::{Deserialize, Serialize};

/// Biological sex used by the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Self-reported activity level, with its calorie multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// Calorie multiplier applied to BMR for this activity level.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtremelyActive => 1.9,
        }
    }

    /// Parse a form value, falling back to `Sedentary` for anything
    /// unrecognized (including the empty string).
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extremely_active" => Self::ExtremelyActive,
            _ => Self::Sedentary,
        }
    }
}

/// Weight goal driving the calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl Goal {
    /// Daily calorie adjustment for this goal, in kcal.
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Self::LoseWeight => -500,
            Self::MaintainWeight => 0,
            Self::GainWeight => 500,
        }
    }
}

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Target macronutrient grams derived from a calorie budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein grams per day.
    pub protein_g: i32,
    /// Carbohydrate grams per day.
    pub carb_g: i32,
    /// Fat grams per day.
    pub fat_g: i32,
}

/// Everything the diet planner collects about the user.
///
/// Consumed once to derive a diet plan; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHealthProfile {
    /// Age in whole years.
    pub age: u32,
    pub gender: Gender,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimetres.
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    /// Free-text dietary restrictions ("vegetarian", "low sodium", ...).
    #[serde(default)]
    pub dietary_restrictions: String,
    /// Free-text food allergies.
    #[serde(default)]
    pub allergies: String,
    /// Preferred cuisine.
    #[serde(default)]
    pub cuisine: String,
}

impl UserHealthProfile {
    /// Validate the numeric fields the calculators depend on.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::Validation`] for a zero age or a
    /// non-positive / non-finite weight or height. Callers must not issue
    /// the remote generation call when validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(CompanionError::Validation(
                "age must be greater than 0".to_owned(),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CompanionError::Validation(
                "weight must be a positive number of kilograms".to_owned(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(CompanionError::Validation(
                "height must be a positive number of centimetres".to_owned(),
            ));
        }
        Ok(())
    }

    /// Basal metabolic rate for this profile.
    pub fn bmr(&self) -> i32 {
        bmr(self.weight_kg, self.height_cm, self.age, self.gender)
    }

    /// Daily calorie target for this profile.
    pub fn target_calories(&self) -> i32 {
        target_calories(self.bmr(), self.activity_level, self.goal)
    }

    /// Body mass index for this profile.
    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_cm)
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation, kcal/day.
///
/// `10w + 6.25h − 5a + 5` for males, `10w + 6.25h − 5a − 161` for females,
/// rounded to the nearest integer.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    (base + offset).round() as i32
}

/// Daily calorie target: BMR scaled by activity, adjusted for the goal.
pub fn target_calories(bmr: i32, activity: ActivityLevel, goal: Goal) -> i32 {
    let scaled = (f64::from(bmr) * activity.multiplier()).round() as i32;
    scaled + goal.calorie_adjustment()
}

/// Split a calorie budget into macro grams: 25% protein, 50% carbs,
/// 25% fat by calories. Protein and carbs convert at 4 kcal/g, fat at
/// 9 kcal/g; the calorie share and the gram count are each rounded.
pub fn split_macros(total_calories: i32) -> MacroSplit {
    let total = f64::from(total_calories);
    let protein_kcal = (total * 0.25).round();
    let carb_kcal = (total * 0.50).round();
    let fat_kcal = (total * 0.25).round();
    MacroSplit {
        protein_g: (protein_kcal / 4.0).round() as i32,
        carb_g: (carb_kcal / 4.0).round() as i32,
        fat_g: (fat_kcal / 9.0).round() as i32,
    }
}

/// Body mass index: weight in kg over squared height in metres.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
