//! LLM provider adapters and the lookup used to pick one per request.

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use crate::config::Config;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Text generation capability shared by every vendor.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Provider key accepted in `modelName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelName {
    OpenAi,
    Gemini,
}

impl ModelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::OpenAi => "openai",
            ModelName::Gemini => "gemini",
        }
    }
}

impl FromStr for ModelName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ModelName::OpenAi),
            "gemini" => Ok(ModelName::Gemini),
            other => Err(format!("unknown model name: {}", other)),
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass a 2xx vendor reply through; anything else becomes `ProviderError::Status`
/// carrying the vendor's body text.
pub(crate) async fn ensure_success(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ProviderError::Status { status, body })
}

/// Transport failure with the request URL stripped, so credentials in the
/// URL never reach logs.
pub(crate) fn request_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Request(e.without_url())
}

/// Maps each `ModelName` to the adapter that serves it.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    adapters: HashMap<ModelName, Arc<dyn ProviderAdapter>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the real vendor adapters.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with(ModelName::OpenAi, Arc::new(OpenAiProvider::new(&config.openai)))
            .with(ModelName::Gemini, Arc::new(GeminiProvider::new(&config.gemini)))
    }

    pub fn with(mut self, model: ModelName, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(model, adapter);
        self
    }

    pub fn get(&self, model: ModelName) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(&model).cloned()
    }
}
