use clap::Parser;

use crate::api_connection::endpoints::DEFAULT_MODEL;
use crate::profile::{DietPreference, Gender, UserProfile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Person's name
    #[arg(long)]
    pub name: String,

    /// Person's age in years
    #[arg(long)]
    pub age: u32,

    /// Person's gender
    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Weight in kilograms
    #[arg(long)]
    pub weight_kg: f32,

    /// Height in centimeters
    #[arg(long)]
    pub height_cm: f32,

    /// Veg or Non-Veg
    #[arg(long, value_enum)]
    pub diet: DietPreference,

    /// Any generic disease
    #[arg(long)]
    pub disease: String,

    /// Person's region
    #[arg(long)]
    pub region: String,

    /// Person's state
    #[arg(long)]
    pub state: String,

    /// Any allergies
    #[arg(long)]
    pub allergies: String,

    /// Preferred food type
    #[arg(long)]
    pub food_type: String,

    /// Generation model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl Cli {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            diet_preference: self.diet,
            disease: self.disease.clone(),
            region: self.region.clone(),
            state: self.state.clone(),
            allergies: self.allergies.clone(),
            food_type: self.food_type.clone(),
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
