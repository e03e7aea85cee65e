use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ClientSettings, DomainError, TransportConfig};

/// An interface for sending a prompt to an LLM and receiving its text response.
///
/// Implementors own the HTTP transport and the provider wire format, so
/// [`crate::application::InteractionUseCase`] never sees either.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a single user message and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}

/// Builds [`ChatClient`]s in two tiers.
///
/// `build_with_transport` injects a customized transport. It returns
/// [`DomainError::UnsupportedParameter`] when the transport configuration
/// cannot be applied, in which case the caller may fall back to `build`.
pub trait ChatClientFactory: Send + Sync {
    fn build_with_transport(
        &self,
        settings: &ClientSettings,
        transport: &TransportConfig,
    ) -> Result<Arc<dyn ChatClient>, DomainError>;

    fn build(&self, settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError>;
}
