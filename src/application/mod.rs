//! # Application Layer
//!
//! Client initialization and the interaction state machine, written against
//! the interfaces in [`interfaces`] so connectors stay swappable.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
