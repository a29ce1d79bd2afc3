//! Anthropic (Claude) LLM provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use resume_core::config::LlmProvider;
use resume_core::error::{ResumeError, ResumeResult};
use resume_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
use resume_core::types::{split_system, Message, MessageRole};

use crate::http::post_json;
use crate::retry::with_retries;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The Messages API requires `max_tokens`; used when no cap is configured.
/// Claude 3.5 Sonnet (2024-06-20) caps output at 4096 without a beta header.
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic LLM provider.
pub struct AnthropicLlm {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContent {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorDetail,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorDetail {
    message: String,
}

impl AnthropicLlm {
    /// Create a new Anthropic LLM provider.
    pub fn new(config: LlmConfig) -> ResumeResult<Self> {
        let key_var = LlmProvider::Anthropic.api_key_var();
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(key_var).ok())
            .ok_or_else(|| ResumeError::missing_credential(key_var))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-api-key",
            api_key
                .parse()
                .map_err(|_| ResumeError::Configuration("Invalid API key format".to_string()))?,
        );
        headers.insert(
            "anthropic-version",
            ANTHROPIC_VERSION
                .parse()
                .map_err(|_| ResumeError::Configuration("Invalid version header".to_string()))?,
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
            .unwrap_or_else(|| ANTHROPIC_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut config = config;
        if config.model.is_empty() {
            config.model = LlmProvider::Anthropic.default_model().to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn build_request(&self, messages: &[Message], options: &GenerationOptions) -> AnthropicRequest {
        let (system, turns) = split_system(messages);

        let messages = turns
            .into_iter()
            .map(|m| AnthropicMessage {
                role: match m.role {
                    MessageRole::Assistant => "assistant".to_string(),
                    _ => "user".to_string(),
                },
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: self.config.model.clone(),
            max_tokens: options
                .max_tokens
                .or(self.config.max_tokens)
                .unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
            system,
            messages,
        }
    }

    fn parse_response(body: &str) -> ResumeResult<LlmResponse> {
        let response: AnthropicResponse = serde_json::from_str(body)
            .map_err(|e| ResumeError::invalid_response(format!("Failed to parse response: {}", e)))?;

        let content = response
            .content
            .iter()
            .filter(|c| c.content_type == "text")
            .filter_map(|c| c.text.as_deref())
            .collect::<Vec<_>>();
        let content = (!content.is_empty()).then(|| content.concat());

        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.input_tokens,
            completion_tokens: u.output_tokens,
            total_tokens: u.input_tokens + u.output_tokens,
        });

        Ok(LlmResponse { content, usage })
    }

    fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<AnthropicError>(body)
            .ok()
            .map(|e| e.error.message)
    }
}

#[async_trait]
impl Llm for AnthropicLlm {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> ResumeResult<LlmResponse> {
        let options = options.unwrap_or_default();
        let request = self.build_request(messages, &options);
        let request = &request;
        let url = format!("{}/messages", self.base_url);
        let url = url.as_str();

        let body = with_retries("Anthropic", self.config.max_retries, move || {
            post_json(&self.client, url, request, "Anthropic", Self::error_message)
        })
        .await?;

        Self::parse_response(&body)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
