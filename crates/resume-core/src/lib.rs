//! resume-core - Core library for resume-parser.
//!
//! This crate provides the profile types, the completion-model trait, and the
//! resume interpreter that turns extracted document text into a structured
//! candidate profile.
//!
//! # Example
//!
//! ```ignore
//! use resume_core::{ParserConfig, ResumeInterpreter};
//!
//! let config = ParserConfig::from_env()?;
//! let llm = resume_llm::LlmFactory::create(config.llm.provider, config.llm.config)?;
//!
//! let interpreter = ResumeInterpreter::new(llm);
//! let outcome = interpreter.interpret(&resume_text).await?;
//! println!("{}", outcome.to_json_line());
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{LlmProvider, LlmProviderConfig, ParserConfig};
pub use error::{ErrorCode, ResumeError, ResumeResult};
pub use interpreter::{NoDataReason, ProfileOutcome, ResumeInterpreter};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
pub use types::{CompanyRecord, Message, MessageRole, ResumeProfile};
