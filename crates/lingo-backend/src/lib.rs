use std::sync::Arc;

pub mod gemini;
pub mod schema;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use gemini::GeminiBackend;
pub use schema::{Schema, SchemaType};
pub use types::{
    Blob, Candidate, Content, GenerateRequest, GenerateResponse, GenerationConfig, Modality, Part,
    SpeechConfig,
};

/// Generative model provider interface
#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run one generation request against `request.model`
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[async_trait::async_trait]
impl<B: GenerativeBackend + ?Sized> GenerativeBackend for Arc<B> {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        (**self).generate(request).await
    }

    fn metadata(&self) -> ProviderMetadata {
        (**self).metadata()
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Whether the failure reads as a missing model or endpoint
    pub fn is_not_found(&self) -> bool {
        if let BackendError::ApiError { status: 404, .. } = self {
            return true;
        }

        let message = self.to_string();
        message.contains("404") || message.to_lowercase().contains("not found")
    }
}
