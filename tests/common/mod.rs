use async_trait::async_trait;
use tokio::sync::Mutex;

use oauth2_actix_middleware::{
    Authorization, EngineError, EngineRequest, ErrorReporter, JsonBodyWrite, OAuth2Engine,
    OAuthErrorEvent, ReportError,
};

/// Engine stub that accepts every request.
///
/// Optional `require_*` fields make the stub validate that the adapter
/// actually delivered credentials/body to the engine.
pub struct AllowEngine {
    pub authorization: Authorization,
    pub grant_payload: Option<serde_json::Value>,
    pub require_bearer: Option<String>,
    pub require_grant_type: Option<String>,
}

impl AllowEngine {
    pub fn new(authorization: Authorization) -> Self {
        Self {
            authorization,
            grant_payload: None,
            require_bearer: None,
            require_grant_type: None,
        }
    }
}

#[async_trait]
impl OAuth2Engine for AllowEngine {
    async fn authorise(&self, request: &EngineRequest) -> Result<Authorization, EngineError> {
        if let Some(expected) = &self.require_bearer {
            if request.bearer_token() != Some(expected.as_str()) {
                return Err(EngineError::invalid_token("Token missing or mismatched"));
            }
        }
        Ok(self.authorization.clone())
    }

    async fn grant(
        &self,
        request: &EngineRequest,
        response: &mut dyn JsonBodyWrite,
    ) -> Result<(), EngineError> {
        if let Some(expected) = &self.require_grant_type {
            let params = request.form_params();
            if params.get("grant_type") != Some(expected) {
                return Err(EngineError::invalid_grant("Unsupported grant type"));
            }
        }
        if let Some(payload) = &self.grant_payload {
            response.write_json(payload.clone());
        }
        Ok(())
    }
}

/// Engine stub that rejects every request with a fixed error.
pub struct DenyEngine {
    pub error: EngineError,
}

#[async_trait]
impl OAuth2Engine for DenyEngine {
    async fn authorise(&self, _request: &EngineRequest) -> Result<Authorization, EngineError> {
        Err(self.error.clone())
    }

    async fn grant(
        &self,
        _request: &EngineRequest,
        _response: &mut dyn JsonBodyWrite,
    ) -> Result<(), EngineError> {
        Err(self.error.clone())
    }
}

/// Recording reporter for asserting on emitted error events.
#[derive(Default)]
pub struct ProbeReporter {
    pub events: Mutex<Vec<OAuthErrorEvent>>,
}

#[async_trait]
impl ErrorReporter for ProbeReporter {
    async fn report(&self, event: OAuthErrorEvent) -> Result<(), ReportError> {
        self.events.lock().await.push(event);
        Ok(())
    }
}
