use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::endpoints::{
    Content, GenerateContentRequest, GenerationConfig, Provider, TextPart, DEFAULT_MODEL,
};
use crate::bmi::{self, BmiError, BmiResult};
use crate::charts::{self, BmiScatterPoint};
use crate::profile::{UserProfile, ValidationError};
use crate::prompt_builder::{build_recommendation_prompt, PromptError};
use crate::usage::UsageTracker;

pub const GOOGLE_API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

/// Single error category for everything that can go wrong between sending a
/// prompt and getting text back: missing key, network failure, non-success
/// status, empty or malformed payload. Callers see one kind of failure.
#[derive(Debug)]
pub struct GenerationFailed {
    pub reason: String,
}

impl GenerationFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recommendation generation failed: {}", self.reason)
    }
}

impl Error for GenerationFailed {}

impl From<ApiConnectionError> for GenerationFailed {
    fn from(err: ApiConnectionError) -> Self {
        GenerationFailed::new(err.to_string())
    }
}

/// Capability boundary around the hosted text-generation service. The
/// pipeline only ever sees this trait, so tests can swap in a local fake.
pub trait RecommendationClient {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerationFailed>> + Send;
}

/// Production client for the Google Generative Language API.
pub struct GeminiClient {
    provider: Provider,
    model: String,
}

impl GeminiClient {
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Client wired to `GOOGLE_API_KEY` and the default model.
    pub fn from_env() -> Self {
        Self::new(Provider::gemini(GOOGLE_API_KEY_ENV_VAR), DEFAULT_MODEL)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl RecommendationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailed> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig::recommendation_defaults()),
        };

        let response = self
            .provider
            .call_generate_content(&self.model, request)
            .await?;

        if let Some(candidate) = response.candidates.first() {
            let text: String = candidate
                .content
                .as_ref()
                .map(|content| {
                    content
                        .parts
                        .iter()
                        .map(|part| part.text.as_str())
                        .collect::<Vec<_>>()
                        .join("")
                })
                .unwrap_or_default();

            if text.trim().is_empty() {
                return Err(GenerationFailed::new(
                    "API returned a candidate with no text content",
                ));
            }
            Ok(text)
        } else {
            Err(GenerationFailed::new(
                "No response candidates received from API",
            ))
        }
    }
}

/// Everything a submission produces: the raw recommendation text, the BMI
/// assessment, and the scatter marker for the chart collaborator.
#[derive(Debug, Clone)]
pub struct Submission {
    pub recommendation: String,
    pub bmi: BmiResult,
    pub scatter: BmiScatterPoint,
}

#[derive(Debug)]
pub enum SubmissionError {
    Validation(ValidationError),
    Bmi(BmiError),
    Prompt(PromptError),
    Generation(GenerationFailed),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Validation(err) => write!(f, "{}", err),
            SubmissionError::Bmi(err) => write!(f, "{}", err),
            SubmissionError::Prompt(err) => write!(f, "{}", err),
            SubmissionError::Generation(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SubmissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubmissionError::Validation(err) => Some(err),
            SubmissionError::Bmi(err) => Some(err),
            SubmissionError::Prompt(err) => Some(err),
            SubmissionError::Generation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SubmissionError {
    fn from(err: ValidationError) -> Self {
        SubmissionError::Validation(err)
    }
}

impl From<BmiError> for SubmissionError {
    fn from(err: BmiError) -> Self {
        SubmissionError::Bmi(err)
    }
}

impl From<PromptError> for SubmissionError {
    fn from(err: PromptError) -> Self {
        SubmissionError::Prompt(err)
    }
}

impl From<GenerationFailed> for SubmissionError {
    fn from(err: GenerationFailed) -> Self {
        SubmissionError::Generation(err)
    }
}

/// Runs one form submission end to end: validate, record usage, assess BMI,
/// render the prompt, call the generation service. Validation failure stops
/// everything before any side effect; the BMI assessment runs before the
/// network call so a bad height never costs an API request.
pub async fn submit<C: RecommendationClient>(
    client: &C,
    profile: &UserProfile,
    tracker: &mut UsageTracker,
    now: DateTime<Utc>,
) -> Result<Submission, SubmissionError> {
    profile.validate()?;
    tracker.record(now);

    let bmi = bmi::assess(profile.weight_kg, profile.height_cm)?;
    let prompt = build_recommendation_prompt(&profile.to_field_map())?;
    let recommendation = client.generate(&prompt).await?;
    let scatter = charts::bmi_scatter_point(profile.age, profile.weight_kg, &bmi);

    Ok(Submission {
        recommendation,
        bmi,
        scatter,
    })
}
