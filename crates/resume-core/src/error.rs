//! Error types for resume-parser operations.
//!
//! Interpretation-stage failures (no fenced block, malformed JSON, schema
//! mismatch) are not errors; they are reported through
//! [`ProfileOutcome::NoData`](crate::interpreter::ProfileOutcome). Everything
//! in this module is fatal for the current run.

use thiserror::Error;

/// Result type alias for resume-parser operations.
pub type ResumeResult<T> = Result<T, ResumeError>;

/// Main error type for configuration and completion-model failures.
#[derive(Error, Debug)]
pub enum ResumeError {
    /// The completion API rejected the credential.
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        code: ErrorCode,
        retry_after: Option<u64>,
    },

    /// Completion call failed.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A required credential is absent.
    #[error("Configuration error: {var} not found in the environment")]
    MissingCredential { var: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error.
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Provider not supported.
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider { provider: String },
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Authentication (AUTH_xxx)
    AuthInvalidKey,
    AuthMissingCredentials,

    // Rate Limit (RATE_xxx)
    RateLimitExceeded,

    // LLM (LLM_xxx)
    LlmConnectionFailed,
    LlmGenerationFailed,
    LlmInvalidResponse,

    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,

    // Configuration (CFG_xxx)
    ConfigInvalid,
    ConfigUnsupportedProvider,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AuthInvalidKey => "AUTH_001",
            ErrorCode::AuthMissingCredentials => "AUTH_003",
            ErrorCode::RateLimitExceeded => "RATE_001",
            ErrorCode::LlmConnectionFailed => "LLM_001",
            ErrorCode::LlmGenerationFailed => "LLM_002",
            ErrorCode::LlmInvalidResponse => "LLM_003",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::ConfigInvalid => "CFG_001",
            ErrorCode::ConfigUnsupportedProvider => "CFG_002",
        }
    }
}

impl ResumeError {
    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmGenerationFailed,
            source: None,
        }
    }

    /// Create an LLM error for a reply that could not be understood.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmInvalidResponse,
            source: None,
        }
    }

    /// Create a network error, keeping the underlying cause.
    pub fn network(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error for a request that ran past its timeout.
    pub fn timeout(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetTimeout,
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a missing credential.
    pub fn missing_credential(var: &str) -> Self {
        Self::MissingCredential {
            var: var.to_string(),
        }
    }

    /// Attach the server's `Retry-After` hint to a rate-limit error.
    pub fn with_retry_after(self, secs: Option<u64>) -> Self {
        match self {
            Self::RateLimit { message, code, .. } => Self::RateLimit {
                message,
                code,
                retry_after: secs,
            },
            other => other,
        }
    }

    /// Seconds the server asked us to wait, if it said.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Authentication { code, .. } => *code,
            Self::RateLimit { code, .. } => *code,
            Self::Llm { code, .. } => *code,
            Self::Network { code, .. } => *code,
            Self::MissingCredential { .. } => ErrorCode::AuthMissingCredentials,
            Self::Configuration(_) => ErrorCode::ConfigInvalid,
            Self::UnsupportedProvider { .. } => ErrorCode::ConfigUnsupportedProvider,
        }
    }

    /// Whether the completion client should retry after this error.
    ///
    /// Network failures, rate limiting and 5xx responses are transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } | Self::RateLimit { .. } => true,
            Self::Llm { code, .. } => *code == ErrorCode::LlmConnectionFailed,
            _ => false,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Authentication { .. } => Some("Please check your API key"),
            Self::RateLimit { .. } => Some("Please wait before making more requests"),
            Self::MissingCredential { .. } => {
                Some("Set the variable in the environment or in a .env file")
            }
            Self::Configuration(_) => Some("Check the RESUME_LLM_* environment variables"),
            Self::UnsupportedProvider { .. } => {
                Some("Set RESUME_LLM_PROVIDER to 'gemini' or 'anthropic'")
            }
            Self::Llm { .. } => Some("Please check your LLM provider configuration"),
            Self::Network {
                code: ErrorCode::NetTimeout,
                ..
            } => Some("Raise RESUME_LLM_TIMEOUT_SECS or unset it"),
            Self::Network { .. } => None,
        }
    }

    /// Convert an unsuccessful HTTP status from the completion API.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Authentication {
                message: body.to_string(),
                code: ErrorCode::AuthInvalidKey,
                source: None,
            },
            429 => Self::RateLimit {
                message: body.to_string(),
                code: ErrorCode::RateLimitExceeded,
                retry_after: None,
            },
            500..=599 => Self::Llm {
                message: format!("HTTP {}: {}", status, body),
                code: ErrorCode::LlmConnectionFailed,
                source: None,
            },
            _ => Self::Llm {
                message: format!("HTTP {}: {}", status, body),
                code: ErrorCode::LlmGenerationFailed,
                source: None,
            },
        }
    }
}
