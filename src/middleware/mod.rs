mod authorise;
mod grant;
mod respond;

pub use authorise::Authorise;
pub use grant::{CapturedJsonBody, Grant};

use actix_web::dev::ServiceRequest;
use oauth2_engine::{DynEngine, EngineRequest};
use oauth2_report::ReporterHandle;
use std::collections::HashMap;

/// Per-middleware slice of the adapter's read-only state.
#[derive(Clone)]
pub(crate) struct MiddlewareContext {
    pub engine: DynEngine,
    pub reporter: ReporterHandle,
    pub passthrough_errors: bool,
}

/// Snapshot the in-flight request into the engine's framework-agnostic
/// form. Header names are lower-cased; non-UTF8 header values are skipped.
pub(crate) fn snapshot_request(req: &ServiceRequest, body: Vec<u8>) -> EngineRequest {
    let mut headers = HashMap::new();
    for (name, value) in req.headers() {
        if let Ok(value) = value.to_str() {
            headers.insert(name.as_str().to_ascii_lowercase(), value.to_string());
        }
    }

    EngineRequest {
        method: req.method().as_str().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        headers,
        body,
    }
}
