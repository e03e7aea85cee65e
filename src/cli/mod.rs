use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the interactive triage form over HTTP
    Serve {
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the form on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Classify a single exposure description and print the result
    Analyze {
        text: String,
    },

    /// Print the example exposure description
    Example,

    /// Print the usage guide and the general first-aid guide
    Guide,

    /// Show API key and model client status
    Status,

    /// Start MCP (Model Context Protocol) server on stdio for integration with AI tools
    Mcp,
}
