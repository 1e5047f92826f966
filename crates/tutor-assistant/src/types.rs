use serde::{Deserialize, Serialize};

/// Conversation context held by the assistant service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// One invocation of the assistant against a thread's message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub thread_id: String,
    pub status: RunStatus,
}

/// Run lifecycle states reported by the service.
///
/// Only `Completed` counts as success; the failure states end the poll loop
/// with an explicit error instead of spinning until the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
}

impl RunStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RunStatus::Cancelled | RunStatus::Failed | RunStatus::Incomplete | RunStatus::Expired
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a thread, as returned by the message listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageObject {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

/// One content part of a message. Non-text parts keep their kind tag but
/// carry no text payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextValue {
    pub value: String,
}

/// Message listing for a thread. The service documents newest-first order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageList {
    pub data: Vec<MessageObject>,
}

impl MessageList {
    /// Text of the newest assistant-authored message.
    ///
    /// Reads only the first content part. A thread without an assistant
    /// message, or a message without a text part, yields the empty string.
    pub fn newest_assistant_text(&self) -> String {
        self.data
            .iter()
            .find(|message| message.role == Role::Assistant)
            .and_then(|message| message.content.first())
            .and_then(|part| part.text.as_ref())
            .map(|text| text.value.clone())
            .unwrap_or_default()
    }
}

/// A file registered with the service for retrieval use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileObject {
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub purpose: Option<String>,
}
