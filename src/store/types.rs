use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored user-submitted message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Auto-assigned, monotonically increasing identifier
    pub id: i32,

    /// Author of the message
    pub username: String,

    /// Message body
    pub message: String,

    /// Server-assigned insert time (`TIMESTAMP`, no time zone)
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_message_serialization_shape() {
        let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(12, 30, 0, 123456)
            .unwrap();
        let message = Message {
            id: 3,
            username: "alice".to_string(),
            message: "hello".to_string(),
            created_at: Some(created_at),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["username"], "alice");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["created_at"], "2024-01-01T12:30:00.123456");
    }
}
