use chrono::{TimeZone, Utc};

use colloquy_persist::{ChatThread, Message, MessageRole};

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&MessageRole::User).unwrap(),
        "\"user\""
    );
    assert_eq!(
        serde_json::to_string(&MessageRole::Assistant).unwrap(),
        "\"assistant\""
    );
    assert_eq!(
        serde_json::to_string(&MessageRole::System).unwrap(),
        "\"system\""
    );
}

#[test]
fn test_thread_serializes_camel_case() {
    let thread = ChatThread {
        id: "t1".to_string(),
        user_id: "u1".to_string(),
        messages: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };

    let json = serde_json::to_string(&thread).unwrap();
    assert!(json.contains("\"userId\":\"u1\""));
    assert!(json.contains("\"createdAt\":\"2024-01-01T00:00:00Z\""));
    assert!(json.contains("\"updatedAt\":\"2024-01-01T00:00:00Z\""));
}

#[test]
fn test_thread_deserializes_from_wire_format() {
    let json = r#"{
        "id": "t1",
        "userId": "u1",
        "messages": [
            {
                "id": "m1",
                "role": "user",
                "content": "Hello",
                "timestamp": "2024-01-01T00:00:05Z"
            }
        ],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

    let thread: ChatThread = serde_json::from_str(json).unwrap();
    assert_eq!(thread.user_id, "u1");
    assert_eq!(
        thread.created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(thread.messages.len(), 1);
    assert_eq!(thread.messages[0].role, MessageRole::User);
    assert_eq!(
        thread.messages[0].timestamp,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 5).unwrap()
    );
}

#[test]
fn test_new_thread_has_fresh_identity() {
    let a = ChatThread::new("u1");
    let b = ChatThread::new("u1");

    assert_ne!(a.id, b.id);
    assert_eq!(a.user_id, "u1");
    assert!(a.messages.is_empty());
    assert_eq!(a.created_at, a.updated_at);
}

#[test]
fn test_touch_refreshes_updated_at() {
    let mut thread = ChatThread::new("u1");
    let created = thread.created_at;

    thread.touch();
    assert!(thread.updated_at >= created);
    assert_eq!(thread.created_at, created);
}

#[test]
fn test_message_new_assigns_distinct_ids() {
    let a = Message::new(MessageRole::User, "one");
    let b = Message::new(MessageRole::User, "two");
    assert_ne!(a.id, b.id);
}
