use tutor_assistant::{MessageList, Run, RunStatus};

fn message_list(json: &str) -> MessageList {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_run_status_parsing() {
    let run: Run = serde_json::from_str(
        r#"{"id":"run_1","thread_id":"thread_1","status":"in_progress"}"#,
    )
    .unwrap();
    assert_eq!(run.status, RunStatus::InProgress);

    let run: Run =
        serde_json::from_str(r#"{"id":"run_1","thread_id":"thread_1","status":"completed"}"#)
            .unwrap();
    assert_eq!(run.status, RunStatus::Completed);
}

#[test]
fn test_failure_statuses() {
    assert!(RunStatus::Failed.is_failure());
    assert!(RunStatus::Cancelled.is_failure());
    assert!(RunStatus::Expired.is_failure());
    assert!(RunStatus::Incomplete.is_failure());
    assert!(!RunStatus::Completed.is_failure());
    assert!(!RunStatus::Queued.is_failure());
    assert!(!RunStatus::InProgress.is_failure());
}

#[test]
fn test_newest_assistant_text_picks_first_assistant_entry() {
    // Listing order is newest-first, so the first assistant entry is the
    // latest reply.
    let list = message_list(
        r#"{
            "data": [
                {"id": "msg_3", "role": "assistant", "content": [{"type": "text", "text": {"value": "newest"}}]},
                {"id": "msg_2", "role": "user", "content": [{"type": "text", "text": {"value": "question"}}]},
                {"id": "msg_1", "role": "assistant", "content": [{"type": "text", "text": {"value": "older"}}]}
            ]
        }"#,
    );
    assert_eq!(list.newest_assistant_text(), "newest");
}

#[test]
fn test_newest_assistant_text_skips_leading_user_message() {
    let list = message_list(
        r#"{
            "data": [
                {"id": "msg_2", "role": "user", "content": [{"type": "text", "text": {"value": "question"}}]},
                {"id": "msg_1", "role": "assistant", "content": [{"type": "text", "text": {"value": "reply"}}]}
            ]
        }"#,
    );
    assert_eq!(list.newest_assistant_text(), "reply");
}

#[test]
fn test_no_assistant_message_yields_empty_string() {
    let list = message_list(
        r#"{
            "data": [
                {"id": "msg_1", "role": "user", "content": [{"type": "text", "text": {"value": "question"}}]}
            ]
        }"#,
    );
    assert_eq!(list.newest_assistant_text(), "");
}

#[test]
fn test_empty_content_yields_empty_string() {
    let list = message_list(r#"{"data": [{"id": "msg_1", "role": "assistant", "content": []}]}"#);
    assert_eq!(list.newest_assistant_text(), "");
}

#[test]
fn test_non_text_first_part_yields_empty_string() {
    let list = message_list(
        r#"{
            "data": [
                {"id": "msg_1", "role": "assistant", "content": [{"type": "image_file"}]}
            ]
        }"#,
    );
    assert_eq!(list.newest_assistant_text(), "");
}
