use serde::{Deserialize, Serialize};

use crate::auth::repo::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after login: the user record plus the freshly issued
/// session token. Credential fields on the user are never serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub session_token: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "plain-secret".into(),
            session_token: Some("stored-token".into()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn login_response_carries_token_and_hides_credentials() {
        let response = LoginResponse {
            user: sample_user(),
            session_token: "fresh-token".into(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"sessionToken\":\"fresh-token\""));
        assert!(json.contains("ana@example.com"));
        assert!(!json.contains("plain-secret"));
        assert!(!json.contains("stored-token"));
        assert!(!json.contains("session_token"));
    }

    #[test]
    fn users_response_hides_credentials() {
        let json = serde_json::to_string(&UsersResponse {
            users: vec![sample_user()],
        })
        .unwrap();
        assert!(json.contains("\"users\""));
        assert!(!json.contains("password"));
    }
}
