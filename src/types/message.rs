use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a turn in the conversation is attributed to.
///
/// The client only ever stores these two roles; a `system` turn could be
/// injected server-side but never appears in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn as it crosses the wire: client -> proxy -> upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A committed transcript entry on the client side.
///
/// `id` and `created_at` are client-local; only the `Turn` projection is
/// ever transmitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new_user(content: String) -> Self {
        Self::new(Role::User, content)
    }

    pub fn new_assistant(content: String) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn turn(&self) -> Turn {
        Turn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn turn_wire_shape_is_role_and_content_only() {
        let message = Message::new_user("hello".to_string());
        let wire = serde_json::to_value(message.turn()).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({"role": "user", "content": "hello"})
        );
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::new_user("a".to_string());
        let b = Message::new_user("a".to_string());
        assert_ne!(a.id, b.id);
    }
}
