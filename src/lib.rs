//! Actix-web middleware adapter for pluggable OAuth2 engines.
//!
//! The engine (an external OAuth2 library behind [`OAuth2Engine`]) owns all
//! OAuth2 semantics: grant types, token lifecycle, client and credential
//! validation. This crate only bridges its two entry points into actix's
//! middleware chain:
//! - [`OAuthServer::authorise`] guards a route behind the engine's
//!   authorization check.
//! - [`OAuthServer::grant`] turns a route (normally `/oauth/token`) into the
//!   engine's token grant, shimming the JSON-body-write capability the
//!   engine expects on the response side.
//!
//! Engine failures are translated into JSON error responses and reported on
//! a registered [`ErrorReporter`], or re-signaled to the host unmodified
//! when `passthrough_errors` is set.

pub mod middleware;
pub mod server;

pub use middleware::{Authorise, CapturedJsonBody, Grant};
pub use server::{oauth_server, OAuthServer, ServerConfig};

pub use oauth2_engine::{
    Authorization, DynEngine, EngineError, EngineRequest, JsonBodyWrite, OAuth2Engine,
};
pub use oauth2_report::{
    DynReporter, ErrorReporter, OAuthErrorEvent, ReportError, ReporterHandle, TracingReporter,
};
