//! Resume interpretation: prompt the completion model and parse its reply.

pub mod json_parser;
pub mod prompts;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::ResumeResult;
use crate::traits::{GenerationOptions, Llm};

pub use json_parser::{extract_fenced_json, parse_profile, validate_profile};
pub use prompts::{build_messages, build_system_prompt, RESUME_EXTRACTION_PROMPT};

/// Why a reply yielded no structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataReason {
    /// The reply had no ```` ```json ```` fenced block.
    MissingFence,
    /// The fenced block was not valid JSON.
    MalformedJson(String),
    /// The JSON did not match the profile schema.
    SchemaMismatch(String),
}

/// Result of interpreting one completion reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// The raw payload decoded from the reply. It passed schema validation.
    Extracted(Value),
    /// Nothing usable in the reply.
    NoData(NoDataReason),
}

impl ProfileOutcome {
    /// The payload, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            ProfileOutcome::Extracted(value) => Some(value),
            ProfileOutcome::NoData(_) => None,
        }
    }

    /// Whether a payload was extracted.
    pub fn is_extracted(&self) -> bool {
        matches!(self, ProfileOutcome::Extracted(_))
    }

    /// Single-line JSON rendering: the payload, or `null`.
    pub fn to_json_line(&self) -> String {
        match self {
            ProfileOutcome::Extracted(value) => value.to_string(),
            ProfileOutcome::NoData(_) => Value::Null.to_string(),
        }
    }
}

/// Turns extracted resume text into a structured profile with one completion call.
pub struct ResumeInterpreter {
    llm: Arc<dyn Llm>,
}

impl ResumeInterpreter {
    /// Create an interpreter over the given completion model.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Generation options for extraction: literal output, no token cap.
    pub fn generation_options() -> GenerationOptions {
        GenerationOptions {
            temperature: Some(0.0),
            max_tokens: None,
        }
    }

    /// Interpret resume text.
    ///
    /// Errors only when the completion call itself fails. Anything wrong with
    /// the reply's content is reported as [`ProfileOutcome::NoData`].
    pub async fn interpret(&self, extracted_text: &str) -> ResumeResult<ProfileOutcome> {
        let messages = build_messages(extracted_text);

        info!(
            model = self.llm.model_name(),
            text_len = extracted_text.len(),
            "Requesting resume extraction"
        );

        let response = self
            .llm
            .generate(&messages, Some(Self::generation_options()))
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        let outcome = parse_profile(response.content_or_empty());
        if let ProfileOutcome::NoData(reason) = &outcome {
            info!(?reason, "No structured data recovered from model reply");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;
    use crate::traits::{LlmResponse, MockLlm};
    use crate::types::MessageRole;

    fn mock_replying(reply: &'static str) -> MockLlm {
        let mut llm = MockLlm::new();
        llm.expect_model_name().return_const("mock-model".to_string());
        llm.expect_generate()
            .times(1)
            .returning(move |_, _| Ok(LlmResponse::text(reply)));
        llm
    }

    #[tokio::test]
    async fn test_interpret_extracts_profile() {
        let llm = mock_replying(
            "```json\n{\"name\": \"Jane Doe\", \"companies\": [{\"company\": \"Acme\", \"role\": \"Engineer\"}]}\n```",
        );
        let interpreter = ResumeInterpreter::new(Arc::new(llm));

        let outcome = interpreter.interpret("Jane Doe, Engineer at Acme").await.unwrap();
        let value = outcome.into_value().unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["companies"][0]["role"], "Engineer");
    }

    #[tokio::test]
    async fn test_interpret_sends_system_and_user_turns() {
        let mut llm = MockLlm::new();
        llm.expect_model_name().return_const("mock-model".to_string());
        llm.expect_generate()
            .withf(|messages, options| {
                messages.len() == 2
                    && messages[0].role == MessageRole::System
                    && messages[0].content.contains("YYYY-MM-DD")
                    && messages[1].role == MessageRole::User
                    && messages[1].content == "resume body"
                    && options.as_ref().and_then(|o| o.temperature) == Some(0.0)
                    && options.as_ref().and_then(|o| o.max_tokens).is_none()
            })
            .times(1)
            .returning(|_, _| Ok(LlmResponse::text("```json\n{}\n```")));

        let interpreter = ResumeInterpreter::new(Arc::new(llm));
        let outcome = interpreter.interpret("resume body").await.unwrap();
        assert_eq!(outcome, ProfileOutcome::Extracted(serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_interpret_no_fence_is_no_data() {
        let interpreter = ResumeInterpreter::new(Arc::new(mock_replying("Sorry, no resume here.")));
        let outcome = interpreter.interpret("grocery list").await.unwrap();
        assert_eq!(outcome, ProfileOutcome::NoData(NoDataReason::MissingFence));
        assert_eq!(outcome.to_json_line(), "null");
    }

    #[tokio::test]
    async fn test_interpret_malformed_is_no_data() {
        let interpreter =
            ResumeInterpreter::new(Arc::new(mock_replying("```json\n{\"name\": \"Jane\",}\n```")));
        let outcome = interpreter.interpret("Jane").await.unwrap();
        assert!(!outcome.is_extracted());
    }

    #[tokio::test]
    async fn test_interpret_empty_reply_is_no_data() {
        let mut llm = MockLlm::new();
        llm.expect_model_name().return_const("mock-model".to_string());
        llm.expect_generate()
            .returning(|_, _| Ok(LlmResponse::default()));

        let interpreter = ResumeInterpreter::new(Arc::new(llm));
        let outcome = interpreter.interpret("Jane").await.unwrap();
        assert_eq!(outcome, ProfileOutcome::NoData(NoDataReason::MissingFence));
    }

    #[tokio::test]
    async fn test_interpret_propagates_llm_failure() {
        let mut llm = MockLlm::new();
        llm.expect_model_name().return_const("mock-model".to_string());
        llm.expect_generate()
            .times(1)
            .returning(|_, _| Err(ResumeError::llm("upstream exploded")));

        let interpreter = ResumeInterpreter::new(Arc::new(llm));
        let err = interpreter.interpret("Jane").await.unwrap_err();
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn test_to_json_line_is_single_line() {
        let outcome = ProfileOutcome::Extracted(serde_json::json!({
            "name": "Jane",
            "skills": {"Languages": ["Rust"]}
        }));
        let line = outcome.to_json_line();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"name\":\"Jane\""));
    }
}
