use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a successful authorization check.
///
/// The adapter stores this in the request extensions so downstream
/// handlers can see who the request was authorized for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub access_token: String,
    pub client_id: String,
    pub user_id: Option<String>,
    pub scope: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Authorization {
    pub fn new(access_token: String, client_id: String) -> Self {
        Self {
            access_token,
            client_id,
            user_id: None,
            scope: None,
            expires_at: None,
        }
    }

    pub fn with_user(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_scope(mut self, scope: String) -> Self {
        self.scope = Some(scope);
        self
    }
}
