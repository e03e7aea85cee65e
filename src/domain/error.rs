use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Client construction error: {0}")]
    ClientConstruction(String),

    /// The client constructor refused an optional parameter; construction may
    /// be retried without it.
    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(String),

    #[error("Completion error: {0}")]
    Completion(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn client_construction(msg: impl Into<String>) -> Self {
        Self::ClientConstruction(msg.into())
    }

    pub fn unsupported_parameter(msg: impl Into<String>) -> Self {
        Self::UnsupportedParameter(msg.into())
    }

    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_unsupported_parameter(&self) -> bool {
        matches!(self, Self::UnsupportedParameter(_))
    }
}
