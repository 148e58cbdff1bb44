use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Narrow seam to the hosted text-generation backend: submit a prompt,
/// get text back. One awaited round trip, no retries, no streaming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, model: &str, temperature: f32, prompt: &str) -> AppResult<String>;
}

/// `CompletionModel` backed by the Google Generative Language REST API.
pub struct GeminiModel {
    api_key: SecretString,
    http: reqwest::Client,
}

impl GeminiModel {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", GEMINI_API_BASE, model)
    }
}

#[async_trait]
impl CompletionModel for GeminiModel {
    async fn complete(&self, model: &str, temperature: f32, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature },
        };

        let response = self
            .http
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationBackend(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response.json().await?;

        let text: String = data
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::GenerationBackend(
                "Gemini API returned no completion text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
