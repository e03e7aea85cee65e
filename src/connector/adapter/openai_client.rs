use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{ClientSettings, DomainError, TransportConfig};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

/// The two payload shapes an OpenAI-compatible server may return: a chat
/// message object, or the legacy completion text directly.
#[derive(Deserialize)]
#[serde(untagged)]
enum Choice {
    Message { message: ChoiceMessage },
    Text { text: String },
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Choice {
    fn into_text(self) -> Option<String> {
        match self {
            Choice::Message { message } => message.content,
            Choice::Text { text } => Some(text),
        }
    }
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Implements [`ChatClient`] so the interaction use case stays decoupled from
/// transport and serialization details. Built by [`OpenAiClientFactory`].
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    url: String,
}

impl OpenAiChatClient {
    fn new(client: reqwest::Client, settings: &ClientSettings, api_key: String) -> Self {
        let url = format!("{}{}", settings.base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client,
            api_key,
            model: settings.model.clone(),
            temperature: settings.temperature,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn extract_text(response: ApiResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(Choice::into_text)
            .ok_or_else(|| DomainError::completion("response contained no text payload"))
    }

    fn error_detail(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::completion(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "API returned {status}: {}",
                Self::error_detail(&body)
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::completion(format!("failed to parse response: {e}")))?;

        let text = Self::extract_text(api_response)?;
        debug!("OpenAiChatClient raw response: {text}");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Builds [`OpenAiChatClient`]s.
///
/// The first tier injects a custom `reqwest::Client`. When the transport asks
/// for `accept_invalid_certs`, TLS certificate verification is disabled. This
/// is an intentional deployment accommodation and not a security
/// recommendation; pass `--verify-tls` to keep verification on.
pub struct OpenAiClientFactory;

impl OpenAiClientFactory {
    pub fn new() -> Self {
        Self
    }

    fn api_key(settings: &ClientSettings) -> Result<String, DomainError> {
        match settings.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(DomainError::client_construction(
                "OPENAI_API_KEY is not set; an API key is required",
            )),
        }
    }
}

impl Default for OpenAiClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClientFactory for OpenAiClientFactory {
    fn build_with_transport(
        &self,
        settings: &ClientSettings,
        transport: &TransportConfig,
    ) -> Result<Arc<dyn ChatClient>, DomainError> {
        let api_key = Self::api_key(settings)?;

        if transport.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for {}", settings.base_url);
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(transport.accept_invalid_certs)
            .build()
            .map_err(|e| DomainError::unsupported_parameter(format!("custom transport: {e}")))?;

        Ok(Arc::new(OpenAiChatClient::new(client, settings, api_key)))
    }

    fn build(&self, settings: &ClientSettings) -> Result<Arc<dyn ChatClient>, DomainError> {
        let api_key = Self::api_key(settings)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DomainError::client_construction(format!("HTTP client: {e}")))?;

        Ok(Arc::new(OpenAiChatClient::new(client, settings, api_key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_chat_message_content() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"route: ocular"}}]}"#;
        let response: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(OpenAiChatClient::extract_text(response).unwrap(), "route: ocular");
    }

    #[test]
    fn extracts_legacy_text_payload() {
        let body = r#"{"choices":[{"index":0,"text":"route: oral"}]}"#;
        let response: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(OpenAiChatClient::extract_text(response).unwrap(), "route: oral");
    }

    #[test]
    fn empty_choices_is_a_completion_error() {
        let response: ApiResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = OpenAiChatClient::extract_text(response).unwrap_err();
        assert!(matches!(err, DomainError::Completion(_)));
    }

    #[test]
    fn error_detail_prefers_provider_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(OpenAiChatClient::error_detail(body), "Incorrect API key provided");
        assert_eq!(OpenAiChatClient::error_detail(" bad gateway "), "bad gateway");
    }

    #[test]
    fn missing_key_fails_both_tiers() {
        let factory = OpenAiClientFactory::new();
        let settings = ClientSettings::new(None);

        let err = factory
            .build_with_transport(&settings, &TransportConfig::default())
            .err()
            .expect("tier one must fail");
        assert!(!err.is_unsupported_parameter());
        assert!(factory.build(&settings).is_err());
    }

    #[test]
    fn url_joins_base_and_path() {
        let settings = ClientSettings::new(Some("sk".into())).with_base_url("http://localhost:8080/");
        let client = OpenAiChatClient::new(reqwest::Client::new(), &settings, "sk".into());
        assert_eq!(client.url(), "http://localhost:8080/v1/chat/completions");
    }
}
