//! User domain types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use storekeeper_core::UserId;

/// A stored user.
///
/// The password column is never read back, so it has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identity.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users.
    pub email: String,
}

/// Fields supplied when creating a user.
///
/// The password is stored verbatim.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// The stored representation once the store has assigned an id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> NewUser {
        NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug_output = format!("{:?}", sample());
        assert!(debug_output.contains("ada@example.com"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_serialized_user_has_no_password() {
        let user = sample().into_user(UserId::new(3));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_missing_password_is_rejected() {
        let result: Result<NewUser, _> = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","email":"a@b.com"}"#,
        );
        assert!(result.is_err());
    }
}
