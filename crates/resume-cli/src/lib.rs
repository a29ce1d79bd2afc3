//! resume-cli - Wires extraction, the completion model and interpretation
//! into a single parsing run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use resume_core::{Llm, ParserConfig, ProfileOutcome, ResumeError, ResumeInterpreter};
use resume_llm::LlmFactory;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Extract structured candidate data from a PDF or DOCX resume.
#[derive(Debug, Parser)]
#[command(name = "resume-parse", version)]
#[command(about = "Extract structured candidate data from a PDF or DOCX resume")]
pub struct Cli {
    /// Path to the resume (.pdf or .docx)
    pub path: PathBuf,
}

/// Initialize tracing to stderr; stdout carries only the JSON result.
///
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

/// Run one parse: load configuration, build the provider, parse the file.
///
/// Configuration is resolved before the file is touched, so a missing
/// credential is reported first.
pub async fn run(cli: &Cli) -> Result<ProfileOutcome> {
    let config = ParserConfig::from_env().context("Failed to load configuration")?;
    info!(
        provider = ?config.llm.provider,
        model = %config.llm.config.model,
        "Loaded configuration"
    );

    let llm = LlmFactory::from_config(config.llm).context("Failed to create LLM provider")?;
    parse_resume(&cli.path, llm).await
}

/// Extract the document's text and interpret it with `llm`.
pub async fn parse_resume(path: &Path, llm: Arc<dyn Llm>) -> Result<ProfileOutcome> {
    let text = resume_extractors::extract_text(path)
        .await
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;
    info!(path = %path.display(), chars = text.chars().count(), "Extracted resume text");

    ResumeInterpreter::new(llm)
        .interpret(&text)
        .await
        .context("Completion request failed")
}

/// Remediation hint for a failed run, when the cause is a [`ResumeError`].
pub fn suggestion(err: &anyhow::Error) -> Option<&str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ResumeError>())
        .and_then(ResumeError::suggestion)
}
