use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{
    GenerateContentRequest, GenerateContentResponse, Provider, GEMINI_MODELS,
};

const GENERATIVE_LANGUAGE_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey(String),
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

impl Provider {
    pub fn gemini(api_key_env_var_name: &str) -> Self {
        dotenv().ok();
        Self::Gemini {
            api_key: api_key_env_var_name.to_string(),
            available_models: GEMINI_MODELS.to_vec(),
        }
    }

    pub fn get_available_models(&self) -> Vec<super::endpoints::GeminiAvailableModel> {
        match self {
            Provider::Gemini {
                available_models, ..
            } => available_models.clone(),
        }
    }

    pub async fn call_generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiConnectionError> {
        match self {
            Provider::Gemini {
                api_key: api_key_env_var_name,
                ..
            } => {
                dotenv().ok();
                let actual_api_key = env::var(api_key_env_var_name)
                    .map_err(|_| ApiConnectionError::MissingApiKey(api_key_env_var_name.clone()))?;

                let client = Client::new();
                let url = format!("{}/{}:generateContent", GENERATIVE_LANGUAGE_BASE_URL, model);

                let response = client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .header("x-goog-api-key", actual_api_key)
                    .json(&request)
                    .send()
                    .await?;

                if response.status().is_success() {
                    let generate_response = response.json::<GenerateContentResponse>().await?;
                    Ok(generate_response)
                } else {
                    let status = response.status();
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    Err(ApiConnectionError::ApiError { status, error_body })
                }
            }
        }
    }
}
