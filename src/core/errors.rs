use thiserror::Error;

/// Boxed error type used by the generic catch-all variant.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a single call against the exchange API.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The configured private key could not be parsed into an RSA signing
    /// key. Raised at client construction and never retried.
    #[error("invalid RSA private key: {0}")]
    KeyParse(String),

    /// The cryptographic provider rejected the signing operation.
    #[error("failed to sign request: {0}")]
    Signing(#[source] rsa::signature::Error),

    /// The server answered with a non-2xx status. `message` is the
    /// canonical status description; `body` is the raw response payload.
    #[error("HTTP {status} {message}")]
    Http {
        status: u16,
        message: String,
        body: String,
    },

    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced a response: connection refused, timeout,
    /// DNS failure.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    /// Anything that does not fit the categories above.
    #[error("unexpected error: {0}")]
    Other(#[source] BoxError),
}

impl ExchangeError {
    /// Classify a failure raised by the HTTP client before a response was
    /// available. Transport-level failures become [`ExchangeError::Network`];
    /// everything else falls through to the generic variant.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Network(err)
        } else {
            Self::Other(Box::new(err))
        }
    }

    /// Status code of the underlying HTTP error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
