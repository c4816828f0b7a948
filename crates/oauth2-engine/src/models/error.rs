use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "actix")]
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Failure value produced by an engine's check/grant operations.
///
/// The serialized form is the wire body the adapter sends to clients:
/// `code` is always present, `error`/`error_description` are omitted when
/// the engine did not set them, and `headers` never appears in the body
/// (they are applied to the response instead).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineError {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(skip)]
    pub headers: Option<HashMap<String, String>>,
}

impl EngineError {
    pub fn new(code: u16, error: &str, description: Option<&str>) -> Self {
        Self {
            code,
            error: Some(error.to_string()),
            error_description: description.map(|s| s.to_string()),
            headers: None,
        }
    }

    /// Attach a response header (e.g. `WWW-Authenticate`) to carry back verbatim.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn invalid_request(description: &str) -> Self {
        Self::new(400, "invalid_request", Some(description))
    }

    pub fn invalid_client(description: &str) -> Self {
        Self::new(401, "invalid_client", Some(description))
    }

    pub fn invalid_grant(description: &str) -> Self {
        Self::new(400, "invalid_grant", Some(description))
    }

    pub fn invalid_token(description: &str) -> Self {
        Self::new(401, "invalid_token", Some(description))
            .with_header("WWW-Authenticate", "Bearer realm=\"Service\"")
    }

    pub fn server_error(description: &str) -> Self {
        Self::new(500, "server_error", Some(description))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "oauth error {}: {}", self.code, error),
            None => write!(f, "oauth error {}", self.code),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(feature = "actix")]
impl ResponseError for EngineError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(headers) = &self.headers {
            for (name, value) in headers {
                builder.insert_header((name.as_str(), value.as_str()));
            }
        }
        builder.json(self)
    }
}
