use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadStatus {
    Active,
    Expired,
    Unknown,
}

/// Tracks which quiz threads may still receive a feedback turn.
///
/// Entries expire after the configured TTL. Expired entries are dropped on
/// lookup, and the whole map is swept on insert, so it stays bounded by
/// recent quiz activity. In-memory only; registrations do not survive a
/// restart.
pub struct ThreadRegistry {
    ttl: Duration,
    inner: RwLock<HashMap<String, Instant>>,
}

impl ThreadRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Record a freshly created quiz thread as eligible for feedback.
    pub async fn register(&self, thread_id: &str) {
        let mut inner = self.inner.write().await;
        let now = Instant::now();
        inner.retain(|_, registered| now.duration_since(*registered) <= self.ttl);
        inner.insert(thread_id.to_string(), now);
    }

    /// Look up a thread, distinguishing "expired" from "never registered".
    pub async fn status(&self, thread_id: &str) -> ThreadStatus {
        let mut inner = self.inner.write().await;
        match inner.get(thread_id) {
            None => ThreadStatus::Unknown,
            Some(registered) if registered.elapsed() <= self.ttl => ThreadStatus::Active,
            Some(_) => {
                inner.remove(thread_id);
                ThreadStatus::Expired
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
