use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::BytesMut,
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use futures::StreamExt;
use std::future::{ready, Ready};
use std::rc::Rc;

use oauth2_engine::JsonBodyWrite;

use super::{respond, snapshot_request, MiddlewareContext};

/// Buffering implementation of the JSON-body-write capability the engine
/// expects on the response side.
///
/// The payload is stored exactly as given (no wrapping) and later emitted
/// verbatim as the actix response body.
#[derive(Debug, Default)]
pub struct CapturedJsonBody {
    body: Option<serde_json::Value>,
}

impl CapturedJsonBody {
    pub fn take(&mut self) -> Option<serde_json::Value> {
        self.body.take()
    }
}

impl JsonBodyWrite for CapturedJsonBody {
    fn write_json(&mut self, body: serde_json::Value) {
        self.body = Some(body);
    }
}

/// Middleware factory returned by [`OAuthServer::grant`](crate::OAuthServer::grant).
///
/// Drains the request payload (token requests are form-encoded), runs the
/// engine's grant with a [`CapturedJsonBody`] sink, and on success emits
/// the captured token payload as the response once the wrapped service has
/// run. Failures follow the same translation/passthrough branches as
/// [`Authorise`](super::Authorise).
pub struct Grant {
    ctx: MiddlewareContext,
}

impl Grant {
    pub(crate) fn new(ctx: MiddlewareContext) -> Self {
        Self { ctx }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Grant
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GrantMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GrantMiddleware {
            service: Rc::new(service),
            ctx: self.ctx.clone(),
        }))
    }
}

pub struct GrantMiddleware<S> {
    service: Rc<S>,
    ctx: MiddlewareContext,
}

impl<S, B> Service<ServiceRequest> for GrantMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let ctx = self.ctx.clone();
        let svc = self.service.clone();

        Box::pin(async move {
            let mut payload = req.take_payload();
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                body.extend_from_slice(&chunk?);
            }

            let engine_req = snapshot_request(&req, body.to_vec());
            let mut sink = CapturedJsonBody::default();

            match ctx.engine.grant(&engine_req, &mut sink).await {
                Ok(()) => {
                    let res = svc.call(req).await?;

                    match sink.take() {
                        Some(granted) => {
                            tracing::debug!("token granted");
                            let (req, _) = res.into_parts();
                            let response = HttpResponse::Ok().json(granted);
                            Ok(ServiceResponse::new(req, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    if ctx.passthrough_errors {
                        return Err(err.into());
                    }
                    Ok(respond::finish_with_error(&ctx, &err, req))
                }
            }
        })
    }
}
