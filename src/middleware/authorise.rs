use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::{respond, snapshot_request, MiddlewareContext};

/// Middleware factory returned by [`OAuthServer::authorise`](crate::OAuthServer::authorise).
///
/// Runs the engine's authorization check against the request head. On
/// success the wrapped service runs and its response passes through
/// untouched; on failure the chain halts with a translated error (or the
/// error is re-signaled upward under passthrough).
pub struct Authorise {
    ctx: MiddlewareContext,
}

impl Authorise {
    pub(crate) fn new(ctx: MiddlewareContext) -> Self {
        Self { ctx }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authorise
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthoriseMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthoriseMiddleware {
            service: Rc::new(service),
            ctx: self.ctx.clone(),
        }))
    }
}

pub struct AuthoriseMiddleware<S> {
    service: Rc<S>,
    ctx: MiddlewareContext,
}

impl<S, B> Service<ServiceRequest> for AuthoriseMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let ctx = self.ctx.clone();
        let svc = self.service.clone();

        Box::pin(async move {
            // Credentials are carried in headers/query; the payload stays
            // untouched for the wrapped handler.
            let engine_req = snapshot_request(&req, Vec::new());

            match ctx.engine.authorise(&engine_req).await {
                Ok(authorization) => {
                    tracing::debug!(client_id = %authorization.client_id, "request authorised");
                    req.extensions_mut().insert(authorization);

                    let res = svc.call(req).await?;
                    Ok(res.map_into_left_body())
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
