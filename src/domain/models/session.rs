use serde::{Deserialize, Serialize};

use super::guidance::EXAMPLE_TEXT;

/// Per-user interaction state: the description being edited and the last
/// successful analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    input_text: String,
    result: Option<String>,
}

/// Observable phase of a [`Session`]. `Analyzing` is never stored; it only
/// exists while a submit is being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Result,
}

/// A user-initiated action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadExample,
    Clear,
    Submit(String),
}

/// State changes applied by [`Session::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    InputEdited(String),
    ExampleLoaded,
    Cleared,
    /// Verbatim response text of a successful completion.
    AnalysisCompleted(String),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            result: None,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn phase(&self) -> Phase {
        match self.result {
            Some(_) => Phase::Result,
            None => Phase::Idle,
        }
    }

    pub fn reduce(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::InputEdited(text) => Self {
                input_text: text,
                ..self
            },
            SessionEvent::ExampleLoaded => Self {
                input_text: EXAMPLE_TEXT.to_string(),
                ..self
            },
            SessionEvent::Cleared => Self {
                result: None,
                ..self
            },
            SessionEvent::AnalysisCompleted(text) => Self {
                result: Some(text),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_example_sets_exact_text_and_keeps_result() {
        let session = Session::new()
            .reduce(SessionEvent::AnalysisCompleted("previous".into()))
            .reduce(SessionEvent::ExampleLoaded);

        assert_eq!(session.input_text(), EXAMPLE_TEXT);
        assert_eq!(session.result(), Some("previous"));
    }

    #[test]
    fn clear_drops_result_and_keeps_input() {
        let session = Session::with_input("bleach")
            .reduce(SessionEvent::AnalysisCompleted("done".into()))
            .reduce(SessionEvent::Cleared);

        assert_eq!(session.input_text(), "bleach");
        assert_eq!(session.result(), None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn clear_on_idle_session_is_a_no_op() {
        let session = Session::with_input("x");
        let cleared = session.clone().reduce(SessionEvent::Cleared);
        assert_eq!(cleared, session);
        assert_eq!(cleared.reduce(SessionEvent::Cleared), session);
    }

    #[test]
    fn analysis_replaces_previous_result() {
        let session = Session::new()
            .reduce(SessionEvent::AnalysisCompleted("first".into()))
            .reduce(SessionEvent::AnalysisCompleted("second".into()));

        assert_eq!(session.result(), Some("second"));
        assert_eq!(session.phase(), Phase::Result);
    }
}
