use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AnalyzeController, GuideController, StatusController};

pub struct Router<'a> {
    analyze_controller: AnalyzeController<'a>,
    guide_controller: GuideController,
    status_controller: StatusController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analyze_controller: AnalyzeController::new(container),
            guide_controller: GuideController::new(),
            status_controller: StatusController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Analyze { text } => self.analyze_controller.analyze(text).await,
            Commands::Example => Ok(self.guide_controller.example()),
            Commands::Guide => Ok(self.guide_controller.guide()),
            Commands::Status => self.status_controller.status().await,
            Commands::Serve { .. } | Commands::Mcp => {
                unreachable!("Server commands are handled separately in main")
            }
        }
    }
}
