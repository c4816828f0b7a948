use async_trait::async_trait;
use std::sync::Arc;

use crate::{Authorization, EngineError, EngineRequest};

/// Capability the engine needs on the response side of a token grant:
/// a single method that writes a JSON payload as the response body.
///
/// The adapter supplies a buffering implementation; engines must not
/// assume the payload is flushed before the call returns.
pub trait JsonBodyWrite: Send {
    fn write_json(&mut self, body: serde_json::Value);
}

/// The external OAuth2 engine, treated as an opaque collaborator.
///
/// Implementations own all OAuth2 semantics (grant types, token lifecycle,
/// client and credential validation) and may suspend on their own storage
/// I/O. Both operations are invoked once per request with a fresh
/// [`EngineRequest`] snapshot and must be safe to call concurrently.
#[async_trait]
pub trait OAuth2Engine: Send + Sync {
    /// Authorize the request (e.g. validate a bearer token).
    ///
    /// Fails with an [`EngineError`] on invalid, missing, or expired
    /// credentials, or on a malformed request.
    async fn authorise(&self, request: &EngineRequest) -> Result<Authorization, EngineError>;

    /// Grant a token for the request, writing the token payload through
    /// `response`. Normally mounted at a `/oauth/token` route.
    async fn grant(
        &self,
        request: &EngineRequest,
        response: &mut dyn JsonBodyWrite,
    ) -> Result<(), EngineError>;
}

pub type DynEngine = Arc<dyn OAuth2Engine>;
