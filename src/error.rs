use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("{provider} error: {message}")]
    ProviderError {
        provider: &'static str,
        message: String,
        /// Response payload returned by the provider, when it sent one.
        details: Option<serde_json::Value>,
    },
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ShopError {
    pub fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider,
            message: message.into(),
            details: None,
        }
    }

    /// Provider payload if there is one, otherwise the error message as a JSON string.
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::ProviderError {
                details: Some(details),
                ..
            } => details.clone(),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
