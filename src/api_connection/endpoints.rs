use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeminiAvailableModel {
    pub model_name: &'static str,
    pub model_family: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub enum Provider {
    Gemini {
        api_key: String,
        available_models: Vec<GeminiAvailableModel>,
    },
}

pub const GEMINI_MODELS: &[GeminiAvailableModel] = &[
    GeminiAvailableModel {
        model_name: "gemini-1.5-flash",
        model_family: "flash",
    },
    GeminiAvailableModel {
        model_name: "gemini-1.5-pro",
        model_family: "pro",
    },
];

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "topP")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "topK")]
    pub top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Fixed decoding parameters used for every recommendation request.
    pub fn recommendation_defaults() -> Self {
        Self {
            temperature: Some(0.6),
            top_p: Some(1.0),
            top_k: Some(1),
            max_output_tokens: Some(2048),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
    pub index: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(rename = "modelVersion")]
    pub model_version: Option<String>,
}
