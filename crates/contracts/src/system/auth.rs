use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair issued by `POST /api/token/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// The server's record of the current user as of the last successful fetch.
///
/// The accounts endpoint sends `id` as whatever the backend uses (a number
/// today); it is kept dynamic and coerced to text where the client needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl Identity {
    /// The id in string form, empty when the server sent none
    pub fn id_text(&self) -> String {
        match &self.id {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The parsed role, `Role::Unknown` when missing or unrecognized
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .map(Role::parse)
            .unwrap_or(Role::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_is_coerced_to_text() {
        let me: Identity =
            serde_json::from_value(json!({"id": 7, "username": "alice", "role": "GP"})).unwrap();
        assert_eq!(me.id_text(), "7");

        let me: Identity =
            serde_json::from_value(json!({"id": "a1b2", "username": "alice"})).unwrap();
        assert_eq!(me.id_text(), "a1b2");
    }

    #[test]
    fn missing_id_is_empty_text() {
        let me: Identity = serde_json::from_value(json!({"username": "alice"})).unwrap();
        assert_eq!(me.id_text(), "");

        let me: Identity =
            serde_json::from_value(json!({"id": null, "username": "alice"})).unwrap();
        assert_eq!(me.id_text(), "");
    }

    #[test]
    fn role_parses_case_insensitively() {
        let me: Identity =
            serde_json::from_value(json!({"id": 1, "username": "bob", "role": "patient"}))
                .unwrap();
        assert_eq!(me.role(), Role::Patient);
    }

    #[test]
    fn missing_role_is_unknown() {
        let me: Identity = serde_json::from_value(json!({"id": 1, "username": "bob"})).unwrap();
        assert_eq!(me.role(), Role::Unknown);
    }
}
