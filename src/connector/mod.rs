//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion clients (OpenAI-compatible HTTP, offline mock)
//! - The dependency container and CLI controllers
//! - The web form and the MCP server

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
