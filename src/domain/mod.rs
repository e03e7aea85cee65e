//! # Domain Layer
//!
//! Session state, user-visible notices, client settings and the fixed texts
//! shown to the user. This layer is independent of HTTP, UI and runtime.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
