use std::sync::{Arc, OnceLock};

use tracing::{error, info, warn};

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{ClientSettings, DomainError, TransportConfig};

enum ClientSlot {
    Ready(Arc<dyn ChatClient>),
    Failed(String),
}

/// Builds the chat client on first access and hands out the same handle for
/// the rest of the process lifetime.
///
/// Construction never fails past this boundary: every error is logged and
/// memoized as a diagnostic, and [`ChatClientProvider::client`] returns
/// `None`. A failed initialization is not retried until the process restarts.
pub struct ChatClientProvider {
    factory: Arc<dyn ChatClientFactory>,
    settings: ClientSettings,
    transport: TransportConfig,
    slot: OnceLock<ClientSlot>,
}

impl ChatClientProvider {
    pub fn new(
        factory: Arc<dyn ChatClientFactory>,
        settings: ClientSettings,
        transport: TransportConfig,
    ) -> Self {
        Self {
            factory,
            settings,
            transport,
            slot: OnceLock::new(),
        }
    }

    /// The shared client, or `None` if construction failed.
    pub fn client(&self) -> Option<Arc<dyn ChatClient>> {
        match self.slot.get_or_init(|| self.initialize()) {
            ClientSlot::Ready(client) => Some(Arc::clone(client)),
            ClientSlot::Failed(_) => None,
        }
    }

    /// Diagnostic recorded when construction failed. Forces initialization.
    pub fn init_error(&self) -> Option<&str> {
        match self.slot.get_or_init(|| self.initialize()) {
            ClientSlot::Ready(_) => None,
            ClientSlot::Failed(msg) => Some(msg),
        }
    }

    pub fn credential_configured(&self) -> bool {
        self.settings.credential_configured()
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn initialize(&self) -> ClientSlot {
        match self.construct() {
            Ok(client) => {
                info!("Chat model initialized: {}", client.model_name());
                ClientSlot::Ready(client)
            }
            Err(e) => {
                error!("Model initialization failed: {e}");
                ClientSlot::Failed(format!("Model initialization failed: {e}"))
            }
        }
    }

    fn construct(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        match self
            .factory
            .build_with_transport(&self.settings, &self.transport)
        {
            Err(e) if e.is_unsupported_parameter() => {
                warn!("Custom transport rejected ({e}); retrying with the default transport");
                self.factory.build(&self.settings)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct StubClient {
        model: String,
    }

    #[async_trait]
    impl ChatClient for StubClient {
        async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
            Ok("ok".to_string())
        }

        fn model_name(&self) -> &str {
            &self.model
        }
    }

    #[derive(Clone, Copy)]
    enum Tier {
        Ok,
        Unsupported,
        Fails,
    }

    struct FakeFactory {
        with_transport: Tier,
        plain: Tier,
        transport_calls: AtomicUsize,
        plain_calls: AtomicUsize,
        seen: Mutex<Vec<ClientSettings>>,
    }

    impl FakeFactory {
        fn new(with_transport: Tier, plain: Tier) -> Self {
            Self {
                with_transport,
                plain,
                transport_calls: AtomicUsize::new(0),
                plain_calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn outcome(tier: Tier, settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError> {
            match tier {
                Tier::Ok => Ok(Arc::new(StubClient {
                    model: settings.model.clone(),
                })),
                Tier::Unsupported => Err(DomainError::unsupported_parameter("http_client")),
                Tier::Fails => Err(DomainError::client_construction("boom")),
            }
        }
    }

    impl ChatClientFactory for FakeFactory {
        fn build_with_transport(
            &self,
            settings: &ClientSettings,
            _transport: &TransportConfig,
        ) -> Result<Arc<dyn ChatClient>, DomainError> {
            self.transport_calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(settings.clone());
            Self::outcome(self.with_transport, settings)
        }

        fn build(&self, settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError> {
            self.plain_calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(settings.clone());
            Self::outcome(self.plain, settings)
        }
    }

    fn provider(factory: Arc<FakeFactory>) -> ChatClientProvider {
        let settings = ClientSettings::new(Some("sk-test".into())).with_model("gpt-test");
        ChatClientProvider::new(factory, settings, TransportConfig::default())
    }

    #[test]
    fn client_is_built_once_and_shared() {
        let factory = Arc::new(FakeFactory::new(Tier::Ok, Tier::Ok));
        let provider = provider(factory.clone());

        let first = provider.client().expect("client");
        let second = provider.client().expect("client");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.transport_calls.load(Ordering::SeqCst), 1);
        assert_eq!(factory.plain_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsupported_transport_falls_back_with_identical_settings() {
        let factory = Arc::new(FakeFactory::new(Tier::Unsupported, Tier::Ok));
        let provider = provider(factory.clone());

        let client = provider.client().expect("fallback client");
        assert_eq!(client.model_name(), "gpt-test");
        assert_eq!(factory.plain_calls.load(Ordering::SeqCst), 1);

        let seen = factory.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn both_tiers_failing_yields_sentinel() {
        let factory = Arc::new(FakeFactory::new(Tier::Unsupported, Tier::Fails));
        let provider = provider(factory.clone());

        assert!(provider.client().is_none());
        assert!(provider.init_error().unwrap().contains("boom"));
        assert!(provider.client().is_none());
        assert_eq!(factory.plain_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_first_tier_errors_do_not_fall_back() {
        let factory = Arc::new(FakeFactory::new(Tier::Fails, Tier::Ok));
        let provider = provider(factory.clone());

        assert!(provider.client().is_none());
        assert_eq!(factory.plain_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn concurrent_access_observes_one_handle() {
        let factory = Arc::new(FakeFactory::new(Tier::Ok, Tier::Ok));
        let provider = Arc::new(provider(factory.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let p = Arc::clone(&provider);
                std::thread::spawn(move || p.client().expect("client"))
            })
            .collect();
        let clients: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(clients.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(factory.transport_calls.load(Ordering::SeqCst), 1);
    }
}
