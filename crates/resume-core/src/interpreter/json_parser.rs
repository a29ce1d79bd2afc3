//! JSON parsing utilities for completion replies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::types::ResumeProfile;

use super::{NoDataReason, ProfileOutcome};

/// Opening ```` ```json ```` line up to the first closing fence.
static JSON_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\n(.*?)```").expect("fence pattern is valid"));

/// Find the first ```` ```json ```` fenced block and return its trimmed body.
pub fn extract_fenced_json(text: &str) -> Option<&str> {
    JSON_FENCE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Check a decoded payload against the [`ResumeProfile`] schema.
///
/// The payload must be an object; each field, when present and non-null,
/// must have the declared type. Unknown keys are ignored. Nothing is coerced.
pub fn validate_profile(payload: &Value) -> Result<ResumeProfile, String> {
    if !payload.is_object() {
        return Err(format!("expected a JSON object, got {}", json_kind(payload)));
    }
    ResumeProfile::deserialize(payload).map_err(|e| e.to_string())
}

/// Turn a completion reply into a [`ProfileOutcome`].
///
/// Never fails: a missing block, malformed JSON and a schema mismatch all end
/// up as [`ProfileOutcome::NoData`], the latter two logged at warn level.
pub fn parse_profile(reply: &str) -> ProfileOutcome {
    let Some(json_str) = extract_fenced_json(reply) else {
        return ProfileOutcome::NoData(NoDataReason::MissingFence);
    };

    let payload: Value = match serde_json::from_str(json_str) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                error = %e,
                line = e.line(),
                column = e.column(),
                category = ?e.classify(),
                "Failed to parse fenced JSON in model reply"
            );
            return ProfileOutcome::NoData(NoDataReason::MalformedJson(e.to_string()));
        }
    };

    if let Err(message) = validate_profile(&payload) {
        warn!(error = %message, "Model reply does not match the resume profile schema");
        return ProfileOutcome::NoData(NoDataReason::SchemaMismatch(message));
    }

    // The validated instance is only a check; the raw payload is what we return.
    ProfileOutcome::Extracted(payload)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
