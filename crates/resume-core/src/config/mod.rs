//! Configuration system for resume-parser.
//!
//! Everything comes from the process environment; the binary loads `.env`
//! before calling [`ParserConfig::from_env`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResumeError, ResumeResult};
use crate::traits::LlmConfig;

/// Environment variable naming the provider.
pub const PROVIDER_VAR: &str = "RESUME_LLM_PROVIDER";
/// Environment variable overriding the model.
pub const MODEL_VAR: &str = "RESUME_LLM_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "RESUME_LLM_BASE_URL";
/// Environment variable overriding the retry count.
pub const MAX_RETRIES_VAR: &str = "RESUME_LLM_MAX_RETRIES";
/// Environment variable setting a request timeout.
pub const TIMEOUT_VAR: &str = "RESUME_LLM_TIMEOUT_SECS";

/// LLM provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    Anthropic,
}

impl LlmProvider {
    /// Environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "GOOGLE_API_KEY",
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Model used when none is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "gemini-1.5-flash",
            LlmProvider::Anthropic => "claude-3-5-sonnet-20240620",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "anthropic" | "claude" => Ok(LlmProvider::Anthropic),
            other => Err(ResumeError::UnsupportedProvider {
                provider: other.to_string(),
            }),
        }
    }
}

/// Provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmProviderConfig {
    /// Provider type.
    pub provider: LlmProvider,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: LlmConfig,
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Gemini,
            config: LlmConfig {
                model: LlmProvider::Gemini.default_model().to_string(),
                ..Default::default()
            },
        }
    }
}

/// Top-level configuration for a parsing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Completion model configuration.
    pub llm: LlmProviderConfig,
}

impl ParserConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when the selected provider's API key is absent, so the run halts
    /// before any file is read.
    pub fn from_env() -> ResumeResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> ResumeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup(PROVIDER_VAR) {
            Some(value) => value.parse()?,
            None => LlmProvider::default(),
        };

        let api_key = lookup(provider.api_key_var())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ResumeError::missing_credential(provider.api_key_var()))?;

        let mut builder = Self::builder()
            .provider(provider)
            .api_key(api_key);

        if let Some(model) = lookup(MODEL_VAR) {
            builder = builder.model(model);
        }
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            builder = builder.base_url(base_url);
        }
        if let Some(retries) = lookup(MAX_RETRIES_VAR) {
            builder = builder.max_retries(parse_var(MAX_RETRIES_VAR, &retries)?);
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            builder = builder.timeout_secs(parse_var(TIMEOUT_VAR, &timeout)?);
        }

        Ok(builder.build())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> ResumeResult<T> {
    value.trim().parse().map_err(|_| {
        ResumeError::Configuration(format!("{} must be a non-negative integer, got '{}'", key, value))
    })
}

/// Builder for ParserConfig.
#[derive(Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
    model_overridden: bool,
}

impl ParserConfigBuilder {
    /// Set the provider. Resets the model to the provider default unless one was set.
    pub fn provider(mut self, provider: LlmProvider) -> Self {
        self.config.llm.provider = provider;
        if !self.model_overridden {
            self.config.llm.config.model = provider.default_model().to_string();
        }
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.llm.config.model = model.into();
        self.model_overridden = true;
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.llm.config.api_key = Some(api_key.into());
        self
    }

    /// Set the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.llm.config.base_url = Some(base_url.into());
        self
    }

    /// Set the automatic retry count.
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.llm.config.max_retries = max_retries;
        self
    }

    /// Set a request timeout.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.llm.config.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
