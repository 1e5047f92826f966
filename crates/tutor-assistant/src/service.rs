use std::time::Instant;

use async_trait::async_trait;

use crate::error::{AssistantError, Result};
use crate::poll::PollPolicy;
use crate::types::{FileObject, MessageList, MessageObject, Run, RunStatus, Thread};

/// Outcome of one full request cycle: the thread the exchange happened on
/// (callers keep it if they need a follow-up turn) and the assistant's reply.
#[derive(Debug, Clone)]
pub struct Reply {
    pub thread_id: String,
    pub text: String,
}

/// Operations against the hosted assistant service.
///
/// The primitive operations map one-to-one onto service endpoints; the
/// provided methods compose them into the create/message/run/poll/read
/// cycle every feature route goes through.
#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn create_thread(&self) -> Result<Thread>;

    /// Append one user-role message with the full prompt text.
    async fn add_user_message(&self, thread_id: &str, content: &str) -> Result<MessageObject>;

    /// Start a run of the pre-provisioned assistant against the thread.
    async fn create_run(&self, thread_id: &str) -> Result<Run>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList>;

    /// Register a file with the service for retrieval use.
    async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<FileObject>;

    /// Poll a run until it completes.
    ///
    /// A failure status ends the wait with `RunFailed`; exceeding the
    /// policy deadline ends it with `RunTimedOut`.
    async fn await_run(&self, thread_id: &str, run_id: &str, policy: PollPolicy) -> Result<Run> {
        let started = Instant::now();
        loop {
            let run = self.retrieve_run(thread_id, run_id).await?;
            match run.status {
                RunStatus::Completed => return Ok(run),
                status if status.is_failure() => {
                    return Err(AssistantError::RunFailed {
                        run_id: run.id,
                        status,
                    })
                }
                status => {
                    tracing::debug!(run_id, status = ?status, "run not finished yet");
                }
            }

            if started.elapsed() >= policy.deadline {
                return Err(AssistantError::RunTimedOut {
                    run_id: run_id.to_string(),
                    deadline: policy.deadline,
                });
            }

            tokio::time::sleep(policy.interval).await;
        }
    }

    /// Text of the newest assistant message in the thread, or the empty
    /// string when there is none.
    async fn newest_reply(&self, thread_id: &str) -> Result<String> {
        Ok(self.list_messages(thread_id).await?.newest_assistant_text())
    }

    /// Run the full request cycle for one prompt.
    ///
    /// Creates a thread unless one is supplied, appends the prompt as a user
    /// message, starts a run, waits for completion under the policy, then
    /// reads the newest assistant reply.
    async fn run_prompt(
        &self,
        thread_id: Option<String>,
        prompt: &str,
        policy: PollPolicy,
    ) -> Result<Reply> {
        let thread_id = match thread_id {
            Some(id) => id,
            None => self.create_thread().await?.id,
        };

        self.add_user_message(&thread_id, prompt).await?;
        let run = self.create_run(&thread_id).await?;

        tracing::debug!(thread_id = %thread_id, run_id = %run.id, "waiting for run completion");
        self.await_run(&thread_id, &run.id, policy).await?;

        let text = self.newest_reply(&thread_id).await?;
        Ok(Reply { thread_id, text })
    }
}
