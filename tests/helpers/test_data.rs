//! Test data helpers for creating test objects
//!
//! Messages are built from Bot API JSON, the same shape Telegram delivers
//! in `getUpdates`.

use serde_json::{json, Value};
use teloxide::types::Message;

/// Bot API JSON for a private chat text message
pub fn test_message_json(user_id: i64, chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "TestUser"
        },
        "from": {
            "id": user_id,
            "is_bot": false,
            "first_name": "TestUser",
            "language_code": "en"
        },
        "text": text
    })
}

/// Helper function to create a test Telegram message
pub fn create_test_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    serde_json::from_value(test_message_json(user_id, chat_id, text))
        .expect("test message JSON matches the Bot API shape")
}

/// Message without a sender, as delivered for anonymous channel posts
pub fn create_anonymous_test_message(chat_id: i64, text: &str) -> Message {
    let mut value = test_message_json(0, chat_id, text);
    if let Some(fields) = value.as_object_mut() {
        fields.remove("from");
    }
    serde_json::from_value(value).expect("test message JSON matches the Bot API shape")
}
