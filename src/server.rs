use oauth2_engine::DynEngine;
use oauth2_report::{DynReporter, ReporterHandle, TracingReporter};
use serde::Deserialize;
use std::sync::Arc;

use crate::middleware::{Authorise, Grant, MiddlewareContext};

/// Adapter configuration. A plain serde type so hosts can embed it in
/// their own config files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Re-signal engine errors to the host instead of translating them.
    pub passthrough_errors: bool,
    /// Always forced to `true` by [`OAuthServer::new`]: the adapter, not
    /// the engine, decides whether the middleware chain continues.
    pub continue_after_response: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            passthrough_errors: false,
            continue_after_response: true,
        }
    }
}

/// Wraps one engine instance for the adapter's lifetime and hands out the
/// [`Authorise`] and [`Grant`] middleware factories.
///
/// Cheap to clone; all shared state is read-only after construction.
#[derive(Clone)]
pub struct OAuthServer {
    engine: DynEngine,
    reporter: ReporterHandle,
    config: ServerConfig,
}

impl OAuthServer {
    pub fn new(mut config: ServerConfig, engine: DynEngine) -> Self {
        config.continue_after_response = true;
        Self {
            engine,
            reporter: ReporterHandle::new(Arc::new(TracingReporter)),
            config,
        }
    }

    /// Register the host's error-reporting observer (default: [`TracingReporter`]).
    pub fn with_reporter(mut self, reporter: DynReporter) -> Self {
        self.reporter = ReporterHandle::new(reporter);
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Middleware that authorizes the request via the engine before letting
    /// it proceed to the wrapped handler.
    pub fn authorise(&self) -> Authorise {
        Authorise::new(self.context())
    }

    /// Middleware that grants tokens to valid requests. Normally mounted at
    /// the token route (e.g. `/oauth/token`).
    pub fn grant(&self) -> Grant {
        Grant::new(self.context())
    }

    fn context(&self) -> MiddlewareContext {
        MiddlewareContext {
            engine: self.engine.clone(),
            reporter: self.reporter.clone(),
            passthrough_errors: self.config.passthrough_errors,
        }
    }
}

/// Free-function construction, equivalent to [`OAuthServer::new`].
pub fn oauth_server(config: ServerConfig, engine: DynEngine) -> OAuthServer {
    OAuthServer::new(config, engine)
}
