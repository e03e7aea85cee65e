use serde::Serialize;

use super::guidance::REMEDIATION_CHECKLIST;

/// User-visible outcome of a single transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Warning(String),
    Error {
        message: String,
        diagnostics: Option<Diagnostics>,
    },
}

/// Secondary debug content attached to a failed completion call.
///
/// Only records whether a credential is present, never its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub credential_configured: bool,
    pub detail: String,
    pub checklist: Vec<String>,
}

impl Diagnostics {
    pub fn new(credential_configured: bool, detail: impl Into<String>) -> Self {
        Self {
            credential_configured,
            detail: detail.into(),
            checklist: REMEDIATION_CHECKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error {
            message: msg.into(),
            diagnostics: None,
        }
    }

    pub fn error_with_diagnostics(msg: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self::Error {
            message: msg.into(),
            diagnostics: Some(diagnostics),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Warning(m) => m,
            Self::Error { message, .. } => message,
        }
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::Error { diagnostics, .. } => diagnostics.as_ref(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
