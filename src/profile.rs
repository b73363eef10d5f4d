use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum DietPreference {
    Veg,
    NonVeg,
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietPreference::Veg => write!(f, "Veg"),
            DietPreference::NonVeg => write!(f, "Non-Veg"),
        }
    }
}

/// One form submission's worth of user data. Constructed per submission,
/// consumed immediately, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f32,
    pub height_cm: f32,
    pub diet_preference: DietPreference,
    pub disease: String,
    pub region: String,
    pub state: String,
    pub allergies: String,
    pub food_type: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyFields(Vec<&'static str>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFields(fields) => {
                write!(
                    f,
                    "Please fill in all the form fields (empty: {})",
                    fields.join(", ")
                )
            }
        }
    }
}

impl Error for ValidationError {}

impl UserProfile {
    /// Checks that every free-text field carries a value. Numeric and enum
    /// fields cannot be empty once parsed, so only the text fields are
    /// inspected here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut empty = Vec::new();
        for (label, value) in [
            ("name", self.name.as_str()),
            ("disease", self.disease.as_str()),
            ("region", self.region.as_str()),
            ("state", self.state.as_str()),
            ("allergics", self.allergies.as_str()),
            ("foodtype", self.food_type.as_str()),
        ] {
            if value.trim().is_empty() {
                empty.push(label);
            }
        }
        if empty.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::EmptyFields(empty))
        }
    }

    /// Produces the eleven-key mapping consumed by the prompt template,
    /// keyed by the template's variable names.
    pub fn to_field_map(&self) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), self.name.clone());
        fields.insert("age".to_string(), self.age.to_string());
        fields.insert("gender".to_string(), self.gender.to_string());
        fields.insert("weight".to_string(), self.weight_kg.to_string());
        fields.insert("height".to_string(), self.height_cm.to_string());
        fields.insert("veg_or_nonveg".to_string(), self.diet_preference.to_string());
        fields.insert("disease".to_string(), self.disease.clone());
        fields.insert("region".to_string(), self.region.clone());
        fields.insert("state".to_string(), self.state.clone());
        fields.insert("allergics".to_string(), self.allergies.clone());
        fields.insert("foodtype".to_string(), self.food_type.clone());
        fields
    }
}
