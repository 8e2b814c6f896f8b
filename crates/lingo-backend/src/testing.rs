//! In-memory backend that replays queued replies and records every request

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::types::{GenerateRequest, GenerateResponse, Part};
use crate::{BackendError, GenerativeBackend, ProviderMetadata};

#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<GenerateResponse, BackendError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: GenerateResponse) -> &Self {
        lock(&self.replies).push_back(Ok(response));
        self
    }

    pub fn push_text(&self, text: impl Into<String>) -> &Self {
        self.push_response(GenerateResponse::from_text(text))
    }

    pub fn push_inline(&self, mime_type: &str, data: &str) -> &Self {
        self.push_response(GenerateResponse::from_parts(vec![Part::inline(
            mime_type, data,
        )]))
    }

    pub fn push_error(&self, error: BackendError) -> &Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<GenerateRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        lock(&self.requests).push(request);
        lock(&self.replies).pop_front().unwrap_or_else(|| {
            Err(BackendError::InvalidResponse(
                "no scripted reply left".to_string(),
            ))
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Scripted".to_string(),
            requires_api_key: false,
        }
    }
}
