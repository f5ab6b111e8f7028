//! User entity returned by the protected endpoints.

use serde::{Deserialize, Serialize};

/// A user as listed by `GET /users` and `GET /user/{id}`.
///
/// The server sends more fields than these; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub fullname: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_server_only_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "user_id": "65f0c0ffee",
            "fullname": "Alice Liddell",
            "username": "alice",
            "token": "eyJ...",
            "refresh_token": "eyJ...",
            "created_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.user_id, "65f0c0ffee");
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn rejects_missing_username() {
        let result = serde_json::from_value::<User>(serde_json::json!({
            "user_id": "1",
            "fullname": "Alice"
        }));
        assert!(result.is_err());
    }
}
