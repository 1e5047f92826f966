use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tutor_assistant::{
    AssistantError, AssistantService, ContentPart, FileObject, MessageList, MessageObject,
    PollPolicy, Role, Run, RunStatus, TextValue, Thread,
};

/// Service double that replays a scripted sequence of run statuses and a
/// canned reply. The last status is repeated once the script runs out.
struct ScriptedService {
    statuses: Mutex<VecDeque<RunStatus>>,
    reply: String,
    threads_created: AtomicUsize,
}

impl ScriptedService {
    fn new(statuses: Vec<RunStatus>, reply: &str) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            reply: reply.to_string(),
            threads_created: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AssistantService for ScriptedService {
    async fn create_thread(&self) -> tutor_assistant::Result<Thread> {
        let n = self.threads_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Thread {
            id: format!("thread_{}", n),
            created_at: None,
        })
    }

    async fn add_user_message(
        &self,
        thread_id: &str,
        content: &str,
    ) -> tutor_assistant::Result<MessageObject> {
        let _ = thread_id;
        Ok(MessageObject {
            id: "msg_user".to_string(),
            role: Role::User,
            content: vec![ContentPart {
                kind: "text".to_string(),
                text: Some(TextValue {
                    value: content.to_string(),
                }),
            }],
        })
    }

    async fn create_run(&self, thread_id: &str) -> tutor_assistant::Result<Run> {
        Ok(Run {
            id: "run_1".to_string(),
            thread_id: thread_id.to_string(),
            status: RunStatus::Queued,
        })
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> tutor_assistant::Result<Run> {
        let mut statuses = self.statuses.lock().unwrap();
        let status = if statuses.len() > 1 {
            statuses.pop_front().unwrap()
        } else {
            *statuses.front().unwrap()
        };
        Ok(Run {
            id: run_id.to_string(),
            thread_id: thread_id.to_string(),
            status,
        })
    }

    async fn list_messages(&self, _thread_id: &str) -> tutor_assistant::Result<MessageList> {
        Ok(MessageList {
            data: vec![MessageObject {
                id: "msg_reply".to_string(),
                role: Role::Assistant,
                content: vec![ContentPart {
                    kind: "text".to_string(),
                    text: Some(TextValue {
                        value: self.reply.clone(),
                    }),
                }],
            }],
        })
    }

    async fn upload_file(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> tutor_assistant::Result<FileObject> {
        unimplemented!("not exercised here")
    }
}

fn fast_policy() -> PollPolicy {
    PollPolicy::new(Duration::from_millis(1), Duration::from_secs(5))
}

#[tokio::test]
async fn test_await_run_completes_after_intermediate_states() {
    let service = ScriptedService::new(
        vec![
            RunStatus::Queued,
            RunStatus::InProgress,
            RunStatus::Completed,
        ],
        "done",
    );

    let run = service
        .await_run("thread_1", "run_1", fast_policy())
        .await
        .unwrap();
    assert_eq!(run.status, RunStatus::Completed);
}

#[tokio::test]
async fn test_await_run_surfaces_failed_run() {
    let service = ScriptedService::new(vec![RunStatus::InProgress, RunStatus::Failed], "ignored");

    let err = service
        .await_run("thread_1", "run_1", fast_policy())
        .await
        .unwrap_err();
    match err {
        AssistantError::RunFailed { status, .. } => assert_eq!(status, RunStatus::Failed),
        other => panic!("expected RunFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_await_run_times_out_on_stuck_run() {
    let service = ScriptedService::new(vec![RunStatus::InProgress], "ignored");
    let policy = PollPolicy::new(Duration::from_millis(1), Duration::from_millis(5));

    let err = service
        .await_run("thread_1", "run_1", policy)
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::RunTimedOut { .. }));
}

#[tokio::test]
async fn test_run_prompt_creates_thread_when_none_supplied() {
    let service = ScriptedService::new(vec![RunStatus::Completed], "the reply");

    let reply = service
        .run_prompt(None, "a prompt", fast_policy())
        .await
        .unwrap();
    assert_eq!(reply.thread_id, "thread_1");
    assert_eq!(reply.text, "the reply");
    assert_eq!(service.threads_created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_run_prompt_reuses_supplied_thread() {
    let service = ScriptedService::new(vec![RunStatus::Completed], "follow-up");

    let reply = service
        .run_prompt(Some("thread_existing".to_string()), "again", fast_policy())
        .await
        .unwrap();
    assert_eq!(reply.thread_id, "thread_existing");
    assert_eq!(service.threads_created.load(Ordering::SeqCst), 0);
}
