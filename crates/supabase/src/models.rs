use chrono::Utc;
use serde::{Deserialize, Serialize};

/// An authenticated session returned by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,

    /// Unix timestamp at which the access token expires.
    #[serde(default)]
    pub expires_at: Option<i64>,

    #[serde(default)]
    pub refresh_token: Option<String>,

    pub user: User,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Utc::now().timestamp() >= at,
            None => false,
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: Option<i64>) -> Session {
        Session {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            expires_at,
            refresh_token: None,
            user: User {
                id: "u-1".to_string(),
                email: "pastor@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now().timestamp();
        assert!(session(Some(now - 60)).is_expired());
        assert!(!session(Some(now + 3600)).is_expired());
        // Tokens without an expiry never expire locally.
        assert!(!session(None).is_expired());
    }

    #[test]
    fn test_session_decodes_auth_response() {
        let body = serde_json::json!({
            "access_token": "abc",
            "token_type": "bearer",
            "expires_at": 1_900_000_000i64,
            "refresh_token": "def",
            "user": { "id": "uuid-1", "email": "pastor@example.com" }
        });
        let session: Session = serde_json::from_value(body).unwrap();
        assert_eq!(session.user.email, "pastor@example.com");
    }
}
