//! Tower middleware layer gating requests behind token validation.
//!
//! [`AuthLayer`] wraps the whole router. Per request it either allows
//! (public route, or a valid bearer token whose claims get bound into
//! the request extensions) or rejects with a generic 401 before any
//! handler runs. Validation is pure HMAC decoding, so the whole check
//! happens synchronously inside `call`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use loveall_auth_core::{AuthError, TokenCodec};

use crate::context::AuthContext;
use crate::error::GENERIC_AUTH_MESSAGE;
use crate::extractors::AuthContextExt;

/// Exact method+path allow-list for routes reachable without a token
///
/// Matching is full equality on both method and path. Prefix or
/// pattern matching here would silently open protected routes, so it
/// is not offered.
#[derive(Debug, Clone, Default)]
pub struct PublicRoutes {
    routes: Vec<(Method, String)>,
}

impl PublicRoutes {
    /// Create an empty allow-list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow a route
    #[must_use]
    pub fn allow(mut self, method: Method, path: impl Into<String>) -> Self {
        self.routes.push((method, path.into()));
        self
    }

    /// Check whether a request targets a public route
    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.routes
            .iter()
            .any(|(m, p)| m == method && p == path)
    }
}

/// Tower layer that adds token authentication to requests
#[derive(Clone)]
pub struct AuthLayer {
    codec: TokenCodec,
    public: PublicRoutes,
}

impl AuthLayer {
    /// Create a new auth layer
    #[must_use]
    pub fn new(codec: TokenCodec, public: PublicRoutes) -> Self {
        Self { codec, public }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = Authenticator<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Authenticator {
            inner,
            codec: self.codec.clone(),
            public: self.public.clone(),
        }
    }
}

/// The request authenticator service
#[derive(Clone)]
pub struct Authenticator<S> {
    inner: S,
    codec: TokenCodec,
    public: PublicRoutes,
}

impl<S> Authenticator<S> {
    /// Run the per-request checks; on success the claims are bound into
    /// the request extensions for downstream handlers.
    fn authenticate(&self, req: &mut Request<Body>) -> Result<(), AuthError> {
        // Public routes pass without any token inspection
        if self.public.contains(req.method(), req.uri().path()) {
            return Ok(());
        }

        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?;
        let auth_str = auth_header.to_str().map_err(|_| AuthError::BadScheme)?;
        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(AuthError::BadScheme)?;

        // Decode enforces signature, strict expiry, and typed claims
        let claims = self.codec.decode(token)?;

        req.extensions_mut()
            .insert(AuthContextExt(AuthContext::from(claims)));
        Ok(())
    }
}

/// Generic 401 response; the rejection reason stays server-side
fn rejection_response() -> Response<Body> {
    let body = format!("{{\"error\":\"{GENERIC_AUTH_MESSAGE}\"}}");
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("static rejection response is valid")
}

impl<S> Service<Request<Body>> for Authenticator<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = AuthenticatorFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        match self.authenticate(&mut req) {
            Ok(()) => {
                // Take the service that was driven to readiness
                let clone = self.inner.clone();
                let mut inner = std::mem::replace(&mut self.inner, clone);
                AuthenticatorFuture::Calling {
                    future: inner.call(req),
                }
            }
            Err(reason) => {
                tracing::debug!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    %reason,
                    "request rejected by authenticator"
                );
                AuthenticatorFuture::Reject {
                    response: Some(rejection_response()),
                }
            }
        }
    }
}

pin_project! {
    /// Future for the request authenticator
    #[project = AuthenticatorFutureProj]
    pub enum AuthenticatorFuture<F> {
        /// Short-circuited with a 401 before the inner service ran
        Reject { response: Option<Response<Body>> },
        /// Delegated to the inner service
        Calling { #[pin] future: F },
    }
}

impl<F, E> Future for AuthenticatorFuture<F>
where
    F: Future<Output = Result<Response<Body>, E>>,
{
    type Output = Result<Response<Body>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            AuthenticatorFutureProj::Reject { response } => Poll::Ready(Ok(response
                .take()
                .expect("rejection future polled after completion"))),
            AuthenticatorFutureProj::Calling { future } => future.poll(cx),
        }
    }
}
