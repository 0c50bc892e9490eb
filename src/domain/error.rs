//! Error types for gallery operations.
//!
//! Every failure that can happen between pressing "fetch" and seeing cards is
//! folded into [`GalleryError`] so the controller can surface it as a single
//! message instead of silently keeping a stale list.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for NFT API and controller operations.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Connectivity or timeout failures from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: HTTP {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response was not JSON or lacked the expected fields.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of what was missing or unparsable.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key was found on the command line, environment or config file.
    #[error(
        "Missing API key: pass --api-key, set ALCHEMY_API_KEY, or add \"api_key\" to the config file"
    )]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl GalleryError {
    /// Create a new malformed response error with the given message.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new API error from a status code and response body.
    ///
    /// Long bodies are cut to keep the message popup readable.
    #[must_use]
    pub fn api(status: u16, body: &str) -> Self {
        const MAX_BODY_CHARS: usize = 200;

        let body = body.trim();
        let message = if body.is_empty() {
            "no response body".to_string()
        } else if body.chars().count() > MAX_BODY_CHARS {
            let cut: String = body.chars().take(MAX_BODY_CHARS).collect();
            format!("{cut}...")
        } else {
            body.to_string()
        };
        Self::Api { status, message }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
