//! resume-parse - print structured candidate data for one resume.
//!
//! # Configuration
//!
//! Read from the environment, after loading `.env` if present:
//!
//! - `GOOGLE_API_KEY` - Required for the default Gemini provider
//! - `ANTHROPIC_API_KEY` - Required when `RESUME_LLM_PROVIDER=anthropic`
//! - `RESUME_LLM_PROVIDER`, `RESUME_LLM_MODEL`, `RESUME_LLM_BASE_URL`,
//!   `RESUME_LLM_MAX_RETRIES`, `RESUME_LLM_TIMEOUT_SECS` - Optional overrides
//! - `RUST_LOG` - Log filter, defaults to `warn`
//!
//! # Usage
//!
//! ```text
//! resume-parse resumes/jane.pdf
//! ```
//!
//! Prints the extracted profile as one line of JSON, or `null`.

use anyhow::Result;
use clap::Parser;
use resume_cli::{init_tracing, run, suggestion, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let outcome = run(&cli).await.inspect_err(|e| {
        tracing::error!("{:#}", e);
        if let Some(hint) = suggestion(e) {
            tracing::error!("Hint: {}", hint);
        }
    })?;

    println!("{}", outcome.to_json_line());
    Ok(())
}
