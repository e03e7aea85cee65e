pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatClientFactory, ChatClientProvider, InteractionUseCase, Transition,
};

pub use cli::Commands;

pub use connector::{MockChatClient, MockClientFactory, OpenAiChatClient, OpenAiClientFactory};

pub use domain::{
    Action, ClientSettings, Diagnostics, DomainError, Notice, Phase, Session, SessionEvent,
    TransportConfig,
};
