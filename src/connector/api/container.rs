use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClientFactory, ChatClientProvider, InteractionUseCase};
use crate::domain::{ClientSettings, TransportConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::{MockClientFactory, OpenAiClientFactory};

pub struct ContainerConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Keep TLS certificate verification on. When `false` (the default) the
    /// outbound client accepts invalid certificates, a deployment-environment
    /// accommodation that should be revisited per deployment.
    pub verify_tls: bool,
    /// Use the offline keyword mock instead of a real endpoint.
    pub mock_llm: bool,
}

impl ContainerConfig {
    /// Read configuration from the environment:
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | unset                    |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    /// | `OPENAI_MODEL`    | `gpt-3.5-turbo`          |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            verify_tls: false,
            mock_llm: false,
        }
    }
}

pub struct Container {
    provider: Arc<ChatClientProvider>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let factory: Arc<dyn ChatClientFactory> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockClientFactory::default())
        } else {
            debug!("Using OpenAI-compatible chat client at {}", config.base_url);
            Arc::new(OpenAiClientFactory::new())
        };
        Self::with_factory(config, factory)
    }

    /// Build a container around an explicit factory (used by tests and
    /// alternative providers).
    pub fn with_factory(config: ContainerConfig, factory: Arc<dyn ChatClientFactory>) -> Self {
        let settings = ClientSettings::new(config.api_key.clone())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone());
        let transport = TransportConfig {
            accept_invalid_certs: !config.verify_tls,
        };

        Self {
            provider: Arc::new(ChatClientProvider::new(factory, settings, transport)),
            config,
        }
    }

    pub fn interaction_use_case(&self) -> InteractionUseCase {
        InteractionUseCase::new(self.provider.clone())
    }

    pub fn provider(&self) -> Arc<ChatClientProvider> {
        self.provider.clone()
    }

    pub fn credential_configured(&self) -> bool {
        self.provider.credential_configured()
    }

    pub fn model(&self) -> &str {
        if self.config.mock_llm {
            "mock-llm"
        } else {
            &self.config.model
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn mock_llm(&self) -> bool {
        self.config.mock_llm
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::ChatClient;
    use crate::domain::DomainError;
    use crate::MockChatClient;

    #[derive(Default)]
    struct RecordingFactory {
        transports: Mutex<Vec<TransportConfig>>,
    }

    impl ChatClientFactory for RecordingFactory {
        fn build_with_transport(
            &self,
            _settings: &ClientSettings,
            transport: &TransportConfig,
        ) -> Result<Arc<dyn ChatClient>, DomainError> {
            self.transports.lock().unwrap().push(*transport);
            Ok(Arc::new(MockChatClient::new()))
        }

        fn build(&self, _settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError> {
            Ok(Arc::new(MockChatClient::new()))
        }
    }

    fn config(verify_tls: bool) -> ContainerConfig {
        ContainerConfig {
            api_key: Some("sk-test".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            verify_tls,
            mock_llm: false,
        }
    }

    fn recorded_transport(verify_tls: bool) -> TransportConfig {
        let factory = Arc::new(RecordingFactory::default());
        let container = Container::with_factory(config(verify_tls), factory.clone());

        assert!(container.provider().client().is_some());
        let transports = factory.transports.lock().unwrap();
        assert_eq!(transports.len(), 1);
        transports[0]
    }

    #[test]
    fn default_config_relaxes_tls() {
        let transport = recorded_transport(false);
        assert!(transport.accept_invalid_certs);
    }

    #[test]
    fn verify_tls_keeps_certificate_checks() {
        let transport = recorded_transport(true);
        assert!(!transport.accept_invalid_certs);
    }

    #[test]
    fn from_env_leaves_tls_relaxed() {
        assert!(!ContainerConfig::from_env().verify_tls);
    }
}
