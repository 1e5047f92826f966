use std::time::Duration;

/// Pacing and bound for the run-status poll loop.
///
/// The service gives no push notification for run completion, so the cycle
/// re-reads the status on a fixed interval. The deadline caps the whole wait
/// so a stuck run cannot pin the calling request forever.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub deadline: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            deadline: Duration::from_secs(120),
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration, deadline: Duration) -> Self {
        Self { interval, deadline }
    }
}
