//! Single-page triage form served over HTTP.
//!
//! Every button posts to `/action` and is answered with a redirect to `/`
//! (Post/Redirect/Get), so reloading the page never repeats a transition.

mod page;
mod server;
mod session_store;

pub use page::{escape_html, render, PageView};
pub use server::*;
pub use session_store::*;
