use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ChatClientProvider;
use crate::domain::guidance::build_prompt;
use crate::domain::{Action, Diagnostics, DomainError, Notice, Session, SessionEvent};

pub const EMPTY_INPUT_WARNING: &str = "Please describe the exposure before analyzing.";
pub const CLIENT_MISSING_ERROR: &str =
    "The chat model is not initialized. Check the API key configuration.";
pub const ANALYSIS_SUCCESS: &str = "Analysis complete.";

/// Result of applying one [`Action`] to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub notice: Option<Notice>,
}

impl Transition {
    fn quiet(session: Session) -> Self {
        Self {
            session,
            notice: None,
        }
    }

    fn with_notice(session: Session, notice: Notice) -> Self {
        Self {
            session,
            notice: Some(notice),
        }
    }
}

/// Drives the form: load-example, clear and submit.
///
/// Submit performs at most one completion call and never retries. On any
/// failure the previous result is returned untouched.
pub struct InteractionUseCase {
    provider: Arc<ChatClientProvider>,
}

impl InteractionUseCase {
    pub fn new(provider: Arc<ChatClientProvider>) -> Self {
        Self { provider }
    }

    pub async fn dispatch(&self, session: Session, action: Action) -> Transition {
        match action {
            Action::LoadExample => Transition::quiet(session.reduce(SessionEvent::ExampleLoaded)),
            Action::Clear => Transition::quiet(session.reduce(SessionEvent::Cleared)),
            Action::Submit(text) => self.submit(session, &text).await,
        }
    }

    async fn submit(&self, session: Session, text: &str) -> Transition {
        match self.analyze(text).await {
            Ok(response) => {
                info!("Analysis complete ({} chars)", response.len());
                Transition::with_notice(
                    session.reduce(SessionEvent::AnalysisCompleted(response)),
                    Notice::success(ANALYSIS_SUCCESS),
                )
            }
            Err(e) => Transition::with_notice(session, self.notice_for(e)),
        }
    }

    /// Validates the input, then makes the single completion call.
    async fn analyze(&self, text: &str) -> Result<String, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation(EMPTY_INPUT_WARNING));
        }

        let client = self
            .provider
            .client()
            .ok_or_else(|| DomainError::configuration(CLIENT_MISSING_ERROR))?;

        let prompt = build_prompt(text);
        debug!("Submitting classification prompt ({} chars)", prompt.len());
        client.complete(&prompt).await
    }

    fn notice_for(&self, err: DomainError) -> Notice {
        match err {
            DomainError::Validation(msg) => Notice::warning(msg),
            DomainError::Configuration(msg) => Notice::error(msg),
            other => {
                warn!("Analysis failed: {other}");
                let detail = other.to_string();
                Notice::error_with_diagnostics(
                    format!("An error occurred: {detail}"),
                    Diagnostics::new(self.provider.credential_configured(), detail),
                )
            }
        }
    }
}
