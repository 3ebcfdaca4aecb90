//! Handler registry and dispatch.
//!
//! # Responsibilities
//! - Map path tags to handler functions
//! - Dispatch each request to exactly one handler
//! - Fall back to the default handler on a miss, with a warning
//!
//! # Design Decisions
//! - The registry is built before the server starts and is immutable
//!   afterwards; concurrent dispatch only ever reads it, so no lock
//! - Last registration for a tag wins; no duplicate-tag error
//! - The empty tag is reserved for the default handler and never warns

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::dispatch::tag::handler_tag;

/// Future returned by a handler invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A registered request handler.
pub type Handler = Arc<dyn Fn(Request<Body>) -> HandlerFuture + Send + Sync>;

/// Wrap an async function as a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |request| Box::pin(f(request)))
}

/// Maps path tags to handlers, with a fallback for unmatched tags.
pub struct HandlerRegistry {
    routes: HashMap<String, Handler>,
    default: Handler,
}

impl HandlerRegistry {
    /// Create an empty registry whose default handler answers 404.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            default: handler(not_found),
        }
    }

    /// Register `handler` under `tag`, replacing any prior registration.
    ///
    /// The empty tag is reserved for the default handler; registering it
    /// is equivalent to [`HandlerRegistry::set_default`].
    pub fn register(&mut self, tag: impl Into<String>, handler: Handler) {
        let tag = tag.into();
        if tag.is_empty() {
            self.default = handler;
        } else {
            self.routes.insert(tag, handler);
        }
    }

    /// Replace the fallback handler invoked when no tag matches.
    pub fn set_default(&mut self, handler: Handler) {
        self.default = handler;
    }

    /// Dispatch a request to the handler registered for its path tag.
    ///
    /// Exactly one handler runs per request. An unmatched tag logs a
    /// warning and falls through to the default handler; the empty tag
    /// resolves to the default handler directly.
    pub fn dispatch(&self, request: Request<Body>) -> HandlerFuture {
        let tag = handler_tag(request.uri().path());
        if tag.is_empty() {
            return (self.default)(request);
        }
        match self.routes.get(tag) {
            Some(matched) => matched(request),
            None => {
                tracing::warn!(path = %request.uri().path(), "no handler defined for '{}'", tag);
                (self.default)(request)
            }
        }
    }

    /// Number of registered tags, not counting the default handler.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

async fn not_found(_request: Request<Body>) -> Response {
    (StatusCode::NOT_FOUND, "404 page not found\n").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(body: &'static str) -> Handler {
        handler(move |_request| async move { body.into_response() })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_invokes_registered_handler() {
        let mut registry = HandlerRegistry::new();
        registry.register("weather", tagged("weather reply"));
        registry.register("logger", tagged("logger reply"));

        let response = registry.dispatch(request("/weather/KSFO")).await;
        assert_eq!(body_string(response).await, "weather reply");

        let response = registry.dispatch(request("/logger")).await;
        assert_eq!(body_string(response).await, "logger reply");
    }

    #[tokio::test]
    async fn test_unmatched_tag_falls_back_to_default() {
        let mut registry = HandlerRegistry::new();
        registry.register("weather", tagged("weather reply"));

        let response = registry.dispatch(request("/missing")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_short_paths_resolve_to_default() {
        let registry = HandlerRegistry::new();
        let response = registry.dispatch(request("/")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let mut registry = HandlerRegistry::new();
        registry.register("weather", tagged("first"));
        registry.register("weather", tagged("second"));
        assert_eq!(registry.len(), 1);

        let response = registry.dispatch(request("/weather")).await;
        assert_eq!(body_string(response).await, "second");
    }

    #[tokio::test]
    async fn test_set_default_overrides_fallback() {
        let mut registry = HandlerRegistry::new();
        registry.set_default(tagged("custom fallback"));

        let response = registry.dispatch(request("/missing")).await;
        assert_eq!(body_string(response).await, "custom fallback");
    }

    #[tokio::test]
    async fn test_empty_tag_registers_default() {
        let mut registry = HandlerRegistry::new();
        registry.register("", tagged("custom fallback"));
        assert!(registry.is_empty());

        let response = registry.dispatch(request("/")).await;
        assert_eq!(body_string(response).await, "custom fallback");
    }
}
