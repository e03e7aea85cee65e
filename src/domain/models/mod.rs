mod client_settings;
pub mod guidance;
mod notice;
mod session;

pub use client_settings::*;
pub use notice::*;
pub use session::*;
