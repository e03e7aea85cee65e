mod chat_client_provider;
mod interaction;

pub use chat_client_provider::*;
pub use interaction::*;
