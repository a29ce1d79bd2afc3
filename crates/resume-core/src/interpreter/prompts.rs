//! Prompt templates for resume interpretation.

use crate::types::{Message, ResumeProfile};

/// System instruction for resume extraction. `{schema}` is replaced with the
/// JSON schema of [`ResumeProfile`].
pub const RESUME_EXTRACTION_PROMPT: &str = r#"You are an AI model designed to extract and summarize resume data into a structured JSON format. The input text contains information about a candidate's name, contact details, total experience, skills, and work history. The goal is to produce a brief, compact summary that captures key details accurately.

**Guidelines:**
- Parse dates in `YYYY-MM-DD` format.
- If any values are missing or not provided, use `null`.
- For each company, limit the `summary_of_work` to 2-3 sentences, keeping it concise (50-120 words). Focus on key responsibilities and avoid excessive detail.
- Ensure that `industry_of_the_company` is included for each job experience strictly.
- Ensure that `role` is included for each job experience strictly.
- If the input does not resemble a resume (e.g., lacks name, contact info, or job details), the output should be completely empty.

Output your answer in JSON format such that the schema of output json will match with the below given json schema:
{schema}

Do not include the sample JSON schema in the output and only respond with the summarized content in the JSON format."#;

/// Render the system instruction around the given schema.
pub fn build_system_prompt(schema: &serde_json::Value) -> String {
    RESUME_EXTRACTION_PROMPT.replace("{schema}", &schema.to_string())
}

/// Build the two-turn conversation sent to the completion model.
pub fn build_messages(extracted_text: &str) -> Vec<Message> {
    vec![
        Message::system(build_system_prompt(&ResumeProfile::json_schema())),
        Message::user(extracted_text),
    ]
}
