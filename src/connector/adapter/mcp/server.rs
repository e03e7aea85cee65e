use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::tool;
use rmcp::tool_handler;
use rmcp::tool_router;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::connector::api::Container;
use crate::domain::{Action, Notice, Session};

use super::tools::ClassificationOutput;

/// Input parameters for the classify_exposure tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClassifyToolInput {
    /// Free-text description of the hazardous-substance exposure
    pub description: String,
}

/// MCP Server that exposes exposure classification
#[derive(Clone)]
pub struct TriageMcpServer {
    container: Arc<Container>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TriageMcpServer {
    pub fn new(container: Arc<Container>) -> Self {
        Self {
            container,
            tool_router: Self::tool_router(),
        }
    }

    /// Classify a hazardous-substance exposure incident into product type (drug, household-chemical,
    /// pesticide, other), exposure route (oral, ocular, dermal, inhalation, other) and product name.
    #[tool(name = "classify_exposure")]
    async fn classify_exposure(
        &self,
        params: Parameters<ClassifyToolInput>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0;

        let transition = self
            .container
            .interaction_use_case()
            .dispatch(Session::new(), Action::Submit(input.description.clone()))
            .await;

        if let Some(classification) = transition.session.result() {
            let output = ClassificationOutput {
                description: input.description,
                classification: classification.to_string(),
                model: self.container.model().to_string(),
            };
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                McpError::internal_error(format!("Failed to serialize result: {}", e), None)
            })?;
            return Ok(CallToolResult::success(vec![Content::text(json)]));
        }

        Err(match transition.notice {
            Some(Notice::Warning(msg)) => McpError::invalid_params(msg, None),
            Some(notice) => {
                let mut msg = notice.message().to_string();
                if let Some(diagnostics) = notice.diagnostics() {
                    msg.push_str("\nTroubleshooting:\n");
                    msg.push_str(&diagnostics.checklist.join("\n"));
                }
                McpError::internal_error(msg, None)
            }
            None => McpError::internal_error("Classification produced no result", None),
        })
    }
}

#[tool_handler]
impl ServerHandler for TriageMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Hazardous-substance exposure triage. Use the classify_exposure tool with a free-text \
                 description of the incident to obtain the product type, exposure route and product \
                 name. This is not medical advice; in an emergency contact 119 or the Poison \
                 Information Center (1339)."
                    .into(),
            ),
        }
    }
}
