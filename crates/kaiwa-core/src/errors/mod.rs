/// Failures talking to the scoring model provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Client could not be configured (e.g. missing API key).
    #[error("config error: {message}")]
    Config { message: String },

    /// Transport failure before a response arrived.
    #[error("network error: {message}")]
    Network { message: String },

    /// Provider answered with a non-success status.
    #[error("{provider} chat API error (status {status}): {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected chat-completions shape.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// A choice was returned without text content.
    #[error("{provider} API response missing content")]
    MissingContent { provider: String },
}

impl ProviderError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
