use chrono::{DateTime, Utc};
use oauth2_engine::EngineError;
use serde::{Deserialize, Serialize};

/// Category marker identifying events raised by the OAuth layer.
pub const OAUTH_EVENT_TYPE: &str = "oauth";

/// Transport-ready record of one translated engine failure.
///
/// Reporting is best-effort: publishing an event must never affect the
/// per-request error response, which is written independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthErrorEvent {
    /// Category marker, always `"oauth"`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// HTTP-status-like code from the engine.
    pub code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// Correlation identifier for the producing request.
    pub correlation_id: String,

    /// When the event was created.
    pub occurred_at: DateTime<Utc>,
}

impl OAuthErrorEvent {
    pub fn from_engine_error(err: &EngineError) -> Self {
        Self {
            event_type: OAUTH_EVENT_TYPE.to_string(),
            code: err.code,
            error: err.error.clone(),
            error_description: err.error_description.clone(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            occurred_at: Utc::now(),
        }
    }
}
