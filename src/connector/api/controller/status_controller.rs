use anyhow::Result;

use super::super::Container;

pub struct StatusController<'a> {
    container: &'a Container,
}

impl<'a> StatusController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn status(&self) -> Result<String> {
        let provider = self.container.provider();
        let client_state = match provider.init_error() {
            None => "ready".to_string(),
            Some(err) => err.to_string(),
        };

        Ok(format!(
            "Hazmat Triage Status\n====================\nAPI Key:  {}\nModel:    {}\nEndpoint: {}\nClient:   {}",
            if self.container.credential_configured() { "configured" } else { "not configured" },
            self.container.model(),
            if self.container.mock_llm() { "(offline mock)" } else { self.container.base_url() },
            client_state
        ))
    }
}
