use crate::ProviderMetadata;

/// Word definition provider interface
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Look up the primary definition of a single word
    async fn define(&self, word: &str) -> Result<Definition, DefinitionError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Definition {
    pub word: String,
    pub text: String,
    pub part_of_speech: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("No definition found for '{0}'")]
    NotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
