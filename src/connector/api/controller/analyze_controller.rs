use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::guidance::{first_aid_text, DISCLAIMER};
use crate::domain::{Action, Notice, Session};

use super::super::Container;

pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn analyze(&self, text: String) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("AI is analyzing...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let use_case = self.container.interaction_use_case();
        let transition = use_case.dispatch(Session::new(), Action::Submit(text)).await;

        spinner.finish_and_clear();

        match (transition.session.result(), transition.notice) {
            (Some(result), _) => Ok(Self::format_result(result)),
            (None, Some(notice)) => bail!("{}", Self::format_failure(&notice)),
            (None, None) => bail!("Analysis produced no result"),
        }
    }

    fn format_result(result: &str) -> String {
        format!(
            "Analysis Result\n===============\n{}\n\nGeneral First-Aid Guide\n=======================\n{}\n{}",
            result,
            first_aid_text(),
            DISCLAIMER
        )
    }

    fn format_failure(notice: &Notice) -> String {
        let mut output = notice.message().to_string();
        if let Some(diagnostics) = notice.diagnostics() {
            output.push_str("\n\nDebug information:\n");
            output.push_str(&format!(
                "  API key: {}\n",
                if diagnostics.credential_configured { "configured" } else { "not configured" }
            ));
            output.push_str(&format!("  Error: {}\n", diagnostics.detail));
            output.push_str("\nHow to fix:\n");
            for (i, step) in diagnostics.checklist.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, step));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Diagnostics;

    #[test]
    fn failure_lists_numbered_checklist() {
        let notice = Notice::error_with_diagnostics(
            "An error occurred: 401",
            Diagnostics::new(true, "401 Unauthorized"),
        );
        let text = AnalyzeController::format_failure(&notice);
        assert!(text.starts_with("An error occurred: 401"));
        assert!(text.contains("API key: configured"));
        assert!(text.contains("  1. "));
        assert!(text.contains("  3. "));
    }

    #[test]
    fn result_is_shown_verbatim_with_guide() {
        let text = AnalyzeController::format_result("route: ocular");
        assert!(text.contains("\nroute: ocular\n"));
        assert!(text.contains("Eye exposure"));
        assert!(text.ends_with(DISCLAIMER));
    }
}
