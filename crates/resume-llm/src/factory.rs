//! Factory for creating LLM providers.

use std::sync::Arc;

use resume_core::config::{LlmProvider, LlmProviderConfig};
use resume_core::error::{ResumeError, ResumeResult};
use resume_core::traits::{Llm, LlmConfig};

#[cfg(feature = "anthropic")]
use crate::anthropic::AnthropicLlm;
#[cfg(feature = "gemini")]
use crate::gemini::GeminiLlm;

/// Factory for creating LLM providers.
pub struct LlmFactory;

impl LlmFactory {
    /// Create an LLM provider from the given configuration.
    pub fn create(provider: LlmProvider, config: LlmConfig) -> ResumeResult<Arc<dyn Llm>> {
        match provider {
            #[cfg(feature = "gemini")]
            LlmProvider::Gemini => {
                let llm = GeminiLlm::new(config)?;
                Ok(Arc::new(llm))
            }
            #[cfg(feature = "anthropic")]
            LlmProvider::Anthropic => {
                let llm = AnthropicLlm::new(config)?;
                Ok(Arc::new(llm))
            }
            #[allow(unreachable_patterns)]
            _ => {
                let _ = config;
                Err(ResumeError::UnsupportedProvider {
                    provider: format!("{:?}", provider),
                })
            }
        }
    }

    /// Create the provider described by a loaded [`LlmProviderConfig`].
    pub fn from_config(config: LlmProviderConfig) -> ResumeResult<Arc<dyn Llm>> {
        Self::create(config.provider, config.config)
    }
}
