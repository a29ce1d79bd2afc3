//! resume-llm - Completion model providers for resume-parser.
//!
//! Every provider implements [`resume_core::Llm`] over plain HTTP and retries
//! transient failures (network errors, HTTP 429, HTTP 5xx) with exponential
//! backoff.
//!
//! # Supported Providers
//!
//! - **Gemini** (feature: `gemini`) - Google Generative Language API
//! - **Anthropic** (feature: `anthropic`) - Claude Messages API
//!
//! # Example
//!
//! ```ignore
//! use resume_core::ParserConfig;
//! use resume_llm::LlmFactory;
//!
//! // Provider, model and key come from RESUME_LLM_* and the provider's key variable
//! let config = ParserConfig::from_env()?;
//! let llm = LlmFactory::from_config(config.llm)?;
//! ```

#[cfg(feature = "anthropic")]
mod anthropic;
mod factory;
#[cfg(feature = "gemini")]
mod gemini;
mod http;
mod retry;

#[cfg(feature = "anthropic")]
pub use anthropic::AnthropicLlm;
pub use factory::LlmFactory;
#[cfg(feature = "gemini")]
pub use gemini::GeminiLlm;

// Re-export core types for convenience
pub use resume_core::config::LlmProvider;
pub use resume_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
