use std::sync::Arc;

use tutor_assistant::{AssistantService, PollPolicy};

use crate::config::Config;
use crate::registry::ThreadRegistry;

/// Shared application state passed to all handlers.
///
/// The assistant client sits behind a trait object so route tests can swap
/// in a stub service.
pub struct AppState {
    pub config: Arc<Config>,
    pub assistant: Arc<dyn AssistantService>,
    pub registry: ThreadRegistry,
    pub poll: PollPolicy,
}

impl AppState {
    pub fn new(config: Config, assistant: Arc<dyn AssistantService>) -> Self {
        let poll = config.poll_policy();
        let registry = ThreadRegistry::new(config.thread_ttl());
        Self {
            config: Arc::new(config),
            assistant,
            registry,
            poll,
        }
    }
}
