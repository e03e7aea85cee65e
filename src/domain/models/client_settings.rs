use std::fmt;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Parameters every construction attempt must share: model, temperature and
/// credential. Only the transport differs between attempts.
#[derive(Clone, PartialEq)]
pub struct ClientSettings {
    pub model: String,
    pub temperature: f32,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ClientSettings {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Presence check only. A blank key counts as absent.
    pub fn credential_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field(
                "api_key",
                &if self.credential_configured() { "<redacted>" } else { "<unset>" },
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Transport customization injected on the first construction attempt.
///
/// `accept_invalid_certs` disables TLS certificate verification. This is a
/// deployment-environment accommodation (e.g. intercepting corporate
/// proxies), not a security recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_key() {
        let settings = ClientSettings::new(Some("sk-secret-value".into()));
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn blank_key_is_not_configured() {
        assert!(!ClientSettings::new(None).credential_configured());
        assert!(!ClientSettings::new(Some("   ".into())).credential_configured());
        assert!(ClientSettings::new(Some("sk-1".into())).credential_configured());
    }

    #[test]
    fn defaults_match_classification_model() {
        let settings = ClientSettings::new(None);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.temperature, 0.0);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
