pub mod mcp;
mod mock_chat_client;
mod openai_client;

pub use mock_chat_client::*;
pub use openai_client::*;
