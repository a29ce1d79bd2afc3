//! Core traits for resume-parser providers.

mod llm;

pub use llm::*;
