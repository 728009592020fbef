//! Letter domain models

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::timestamp::format_timestamp;

/// A received letter as shown in the inbox list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub sender_name: String,
    #[serde(default)]
    pub sent_at: String,
}

impl LetterSummary {
    pub fn sent(&self) -> String {
        format_timestamp(&self.sent_at)
    }
}

/// Full letter record, immutable once sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub title: String,
    pub sender_name: String,
    #[serde(default)]
    pub recipient_username: Option<String>,
    pub content: String,
    #[serde(default)]
    pub sent_at: String,
}

impl Letter {
    pub fn sent(&self) -> String {
        format_timestamp(&self.sent_at)
    }
}

/// Deserialize ID that can be number or string
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: JsonValue = Deserialize::deserialize(deserializer)?;
    match value {
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::String(s) => Ok(s),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<JsonValue> = Option::deserialize(deserializer)?;
    match value {
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(JsonValue::Null) | None => Ok(None),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_string_id() {
        let letters: Vec<LetterSummary> = serde_json::from_str(
            r#"[{"id":"1","title":"Hi","senderName":"bob","sentAt":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].id, "1");
        assert_eq!(letters[0].sender_name, "bob");
    }

    #[test]
    fn test_summary_with_numeric_id() {
        let letter: LetterSummary =
            serde_json::from_str(r#"{"id":17,"title":"Hi","senderName":"bob","sentAt":""}"#).unwrap();
        assert_eq!(letter.id, "17");
    }

    #[test]
    fn test_summary_rejects_object_id() {
        let result = serde_json::from_str::<LetterSummary>(
            r#"{"id":{"v":1},"title":"Hi","senderName":"bob"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_detail_without_id_or_recipient() {
        let letter: Letter = serde_json::from_str(
            r#"{"title":"Hi","senderName":"bob","content":"Hello there","sentAt":"2024-01-01T09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(letter.id, None);
        assert_eq!(letter.recipient_username, None);
        assert_eq!(letter.content, "Hello there");
        assert_eq!(letter.sent(), "2024-01-01 09:30:00");
    }

    #[test]
    fn test_full_detail() {
        let letter: Letter = serde_json::from_str(
            r#"{"id":3,"title":"Hi","senderName":"bob","recipientUsername":"alice","content":"x","sentAt":"t"}"#,
        )
        .unwrap();
        assert_eq!(letter.id.as_deref(), Some("3"));
        assert_eq!(letter.recipient_username.as_deref(), Some("alice"));
    }
}
