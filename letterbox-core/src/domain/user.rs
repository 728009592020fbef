//! User domain model

use serde::{Deserialize, Serialize};

use super::timestamp::format_timestamp;

/// The signed-in user as reported by `/api/auth/me`
///
/// Read-only on the client and fetched per page, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            created_at: created_at.into(),
        }
    }

    /// Account creation time formatted for display
    pub fn joined(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_str(
            r#"{"username":"alice","name":"Alice","createdAt":"2024-02-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.joined(), "2024-02-01 10:00:00");
    }

    #[test]
    fn test_created_at_optional() {
        let user: User = serde_json::from_str(r#"{"username":"bob","name":"Bob"}"#).unwrap();
        assert_eq!(user.created_at, "");
    }
}
