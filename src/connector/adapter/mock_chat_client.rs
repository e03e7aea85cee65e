use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::guidance::CLASSIFICATION_PROMPT;
use crate::domain::{ClientSettings, DomainError, TransportConfig};

const MOCK_MODEL: &str = "mock-llm";

const PRODUCT_KEYWORDS: &[(&str, &str)] = &[
    ("pesticide", "pesticide"),
    ("insecticide", "pesticide"),
    ("herbicide", "pesticide"),
    ("bug spray", "pesticide"),
    ("medicine", "drug"),
    ("tablet", "drug"),
    (" pill", "drug"),
    ("acetaminophen", "drug"),
    ("ibuprofen", "drug"),
    ("bleach", "household-chemical"),
    ("detergent", "household-chemical"),
    ("ethanol", "household-chemical"),
    ("wet wipe", "household-chemical"),
    ("cleaner", "household-chemical"),
];

const ROUTE_KEYWORDS: &[(&str, &str)] = &[
    ("eye", "ocular"),
    ("inhal", "inhalation"),
    ("breath", "inhalation"),
    ("fume", "inhalation"),
    ("swallow", "oral"),
    ("drank", "oral"),
    ("mouth", "oral"),
    ("ate ", "oral"),
    ("skin", "dermal"),
    ("armpit", "dermal"),
    ("hand", "dermal"),
    ("burn", "dermal"),
];

enum MockReply {
    Keyword,
    Fixed(String),
    Fail(String),
}

/// Offline [`ChatClient`] that records every prompt it receives.
///
/// The default reply is a keyword-based classification of the description,
/// so the form can be exercised without network access.
pub struct MockChatClient {
    reply: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Keyword)
    }

    pub fn with_response(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fixed(text.into()))
    }

    /// Every call fails with a [`DomainError::Completion`] carrying `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(detail.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }

    fn classify(prompt: &str) -> String {
        let description = prompt
            .strip_prefix(CLASSIFICATION_PROMPT)
            .unwrap_or(prompt)
            .to_lowercase();

        let product = PRODUCT_KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword));
        let route = ROUTE_KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword))
            .map_or("other", |(_, route)| *route);

        let (product_name, product_type) = product.map_or(("unknown", "other"), |(k, t)| (*k, *t));
        format!("product_type: {product_type}; route: {route}; product: {product_name}")
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        debug!("MockChatClient received {} chars", prompt.len());

        match &self.reply {
            MockReply::Keyword => Ok(Self::classify(prompt)),
            MockReply::Fixed(text) => Ok(text.clone()),
            MockReply::Fail(detail) => Err(DomainError::completion(detail.clone())),
        }
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL
    }
}

/// Factory that always hands out the same [`MockChatClient`], ignoring the
/// credential and transport.
pub struct MockClientFactory {
    client: Arc<MockChatClient>,
}

impl MockClientFactory {
    pub fn new(client: Arc<MockChatClient>) -> Self {
        Self { client }
    }
}

impl Default for MockClientFactory {
    fn default() -> Self {
        Self::new(Arc::new(MockChatClient::new()))
    }
}

impl ChatClientFactory for MockClientFactory {
    fn build_with_transport(
        &self,
        settings: &ClientSettings,
        _transport: &TransportConfig,
    ) -> Result<Arc<dyn ChatClient>, DomainError> {
        self.build(settings)
    }

    fn build(&self, _settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError> {
        Ok(self.client.clone())
    }
}
