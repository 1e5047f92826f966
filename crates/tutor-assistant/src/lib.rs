pub mod client;
pub mod error;
pub mod poll;
pub mod service;
pub mod types;

pub use client::AssistantClient;
pub use error::{AssistantError, Result};
pub use poll::PollPolicy;
pub use service::{AssistantService, Reply};
pub use types::{
    ContentPart, FileObject, MessageList, MessageObject, Role, Run, RunStatus, TextValue, Thread,
};
