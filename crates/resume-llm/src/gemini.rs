//! Google Gemini LLM provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use resume_core::config::LlmProvider;
use resume_core::error::{ResumeError, ResumeResult};
use resume_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
use resume_core::types::{split_system, Message, MessageRole};

use crate::http::post_json;
use crate::retry::with_retries;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini LLM provider (Generative Language API, `generateContent`).
pub struct GeminiLlm {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiContent {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart {
                text: Some(text.into()),
            }],
        }
    }
}

impl GeminiLlm {
    /// Create a new Gemini LLM provider.
    pub fn new(config: LlmConfig) -> ResumeResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(LlmProvider::Gemini.api_key_var()).ok())
            .ok_or_else(|| ResumeError::missing_credential(LlmProvider::Gemini.api_key_var()))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            api_key
                .parse()
                .map_err(|_| ResumeError::Configuration("Invalid API key format".to_string()))?,
        );
        headers.insert(
            "content-type",
            "application/json"
                .parse()
                .map_err(|_| ResumeError::Configuration("Invalid content type".to_string()))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            ResumeError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GEMINI_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut config = config;
        if config.model.is_empty() {
            config.model = LlmProvider::Gemini.default_model().to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.config.model
        )
    }

    fn build_request(&self, messages: &[Message], options: &GenerationOptions) -> GeminiRequest {
        let (system, turns) = split_system(messages);

        let contents = turns
            .into_iter()
            .map(|m| {
                let role = match m.role {
                    MessageRole::Assistant => "model",
                    _ => "user",
                };
                GeminiContent::text(Some(role), m.content.clone())
            })
            .collect();

        GeminiRequest {
            system_instruction: system.map(|s| GeminiContent::text(None, s)),
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature.unwrap_or(self.config.temperature),
                max_output_tokens: options.max_tokens.or(self.config.max_tokens),
            },
        }
    }

    fn parse_response(body: &str) -> ResumeResult<LlmResponse> {
        let response: GeminiResponse = serde_json::from_str(body)
            .map_err(|e| ResumeError::invalid_response(format!("Failed to parse response: {}", e)))?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ResumeError::invalid_response("No response candidates returned"))?;

        if let Some(reason) = &candidate.finish_reason {
            debug!(finish_reason = %reason, "Gemini candidate finished");
        }

        let content = candidate.content.map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        });

        let usage = response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LlmResponse { content, usage })
    }

    fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<GeminiError>(body)
            .ok()
            .map(|e| e.error.message)
    }
}

#[async_trait]
impl Llm for GeminiLlm {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> ResumeResult<LlmResponse> {
        let options = options.unwrap_or_default();
        let request = self.build_request(messages, &options);
        let request = &request;
        let url = self.endpoint();
        let url = url.as_str();

        let body = with_retries("Gemini", self.config.max_retries, move || {
            post_json(&self.client, url, request, "Gemini", Self::error_message)
        })
        .await?;

        Self::parse_response(&body)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
