use crate::OAuthErrorEvent;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ReportError {
    Unavailable,
    Rejected(String),
    Other(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Unavailable => write!(f, "error reporter is not available"),
            ReportError::Rejected(msg) => write!(f, "error reporter rejected event: {msg}"),
            ReportError::Other(msg) => write!(f, "error reporter failure: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Observer for translated engine failures.
///
/// Registered on the adapter at startup; hosts plug in their own sink
/// (centralized logging, an event bus, a test probe) without touching the
/// per-request response path.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, event: OAuthErrorEvent) -> Result<(), ReportError>;
}

pub type DynReporter = Arc<dyn ErrorReporter>;

/// Cloneable handle for passing a reporter into middleware instances.
#[derive(Clone)]
pub struct ReporterHandle {
    inner: DynReporter,
}

impl ReporterHandle {
    pub fn new(inner: DynReporter) -> Self {
        Self { inner }
    }

    pub async fn report(&self, event: OAuthErrorEvent) -> Result<(), ReportError> {
        self.inner.report(event).await
    }

    /// Fire-and-forget report.
    ///
    /// Any reporter error is logged but does not affect the caller, so the
    /// error response is never held up by a slow or broken sink.
    pub fn report_best_effort(&self, event: OAuthErrorEvent) {
        let handle = self.clone();
        actix_rt::spawn(async move {
            if let Err(err) = handle.report(event).await {
                tracing::warn!(error = %err, "oauth error report failed (best-effort)");
            }
        });
    }
}

/// Default reporter: emits the event as a structured `tracing` warning.
pub struct TracingReporter;

#[async_trait]
impl ErrorReporter for TracingReporter {
    async fn report(&self, event: OAuthErrorEvent) -> Result<(), ReportError> {
        tracing::warn!(
            code = event.code,
            error = event.error.as_deref().unwrap_or(""),
            error_description = event.error_description.as_deref().unwrap_or(""),
            correlation_id = %event.correlation_id,
            "oauth error"
        );
        Ok(())
    }
}
