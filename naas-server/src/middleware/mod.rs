use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::LocalBoxFuture;
use std::time::Instant;
use tracing::{info, warn, span, Level, Instrument};

use crate::metrics;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware
///
/// Tags every request with an id (taken from `x-request-id` when the client
/// sent one), logs status and latency, and echoes the id on the response.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let start = Instant::now();
        metrics::TOTAL_REQUESTS.inc();

        let span = span!(Level::INFO, "http_request",
            request_id = %request_id,
            method = %method,
            path = %path
        );

        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut res = fut.await?;
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                let status = res.status();

                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                if status.is_success() {
                    info!(
                        status = status.as_u16(),
                        latency_ms = elapsed_ms,
                        "Request completed"
                    );
                } else {
                    warn!(
                        status = status.as_u16(),
                        latency_ms = elapsed_ms,
                        "Request failed"
                    );
                }

                Ok(res)
            }
            .instrument(span),
        )
    }
}
