use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::ResponseError;
use oauth2_engine::EngineError;
use oauth2_report::OAuthErrorEvent;

use super::MiddlewareContext;

/// Terminal handler for engine failures.
///
/// Writes the JSON error response (status = engine code, engine headers
/// applied verbatim, body `{code, error?, error_description?}`) and
/// reports the tagged event fire-and-forget. The rest of the chain is
/// skipped.
pub(crate) fn finish_with_error<B>(
    ctx: &MiddlewareContext,
    err: &EngineError,
    req: ServiceRequest,
) -> ServiceResponse<EitherBody<B>> {
    ctx.reporter
        .report_best_effort(OAuthErrorEvent::from_engine_error(err));

    let response = err.error_response();
    req.into_response(response).map_into_right_body()
}
