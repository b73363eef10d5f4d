use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum BmiError {
    InvalidInput(String),
}

impl fmt::Display for BmiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiError::InvalidInput(reason) => write!(f, "Invalid BMI input: {}", reason),
        }
    }
}

impl Error for BmiError {}

/// BMI category based on the computed index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// bmi < 18.5
    Underweight,

    /// 18.5 <= bmi < 24.9
    NormalWeight,

    /// 25 <= bmi < 29.9
    Overweight,

    /// Everything else, including the residual [24.9, 25) band
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Marker color used by the BMI scatter chart.
    pub fn marker_color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "blue",
            BmiCategory::NormalWeight => "green",
            BmiCategory::Overweight => "yellow",
            BmiCategory::Obesity => "red",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f32,
    pub category: BmiCategory,
}

/// Computes BMI as weight_kg / (height_cm / 100)^2.
///
/// Both inputs must be strictly positive; anything else is rejected before
/// the division happens.
pub fn compute_bmi(weight_kg: f32, height_cm: f32) -> Result<f32, BmiError> {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(BmiError::InvalidInput(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }
    if height_cm.is_nan() || height_cm <= 0.0 {
        return Err(BmiError::InvalidInput(format!(
            "height must be a positive number of centimeters, got {}",
            height_cm
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Maps a BMI value to its category using the literal threshold comparisons
/// of the original classifier. Note the comparisons are kept as-is: a bmi in
/// [24.9, 25) fails every range check and lands in Obesity.
pub fn categorize_bmi(bmi: f32) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        BmiCategory::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Convenience wrapper producing the value/category pair in one step.
pub fn assess(weight_kg: f32, height_cm: f32) -> Result<BmiResult, BmiError> {
    let bmi = compute_bmi(weight_kg, height_cm)?;
    Ok(BmiResult {
        bmi,
        category: categorize_bmi(bmi),
    })
}
