//! Response formatting.
//!
//! # Responsibilities
//! - Wrap a body-producing function as a registered handler
//! - Set `Content-Type` (with charset) and `Content-Length` uniformly
//!
//! # Design Decisions
//! - `Content-Length` is the exact byte length of the body string
//! - The wrapped function can override the status and add headers of its
//!   own through the [`Rendered`] value it returns; this layer performs
//!   no recovery on its behalf

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use axum::response::Response;

use crate::dispatch::Handler;

/// Media type for XML replies.
pub const MEDIA_XML: &str = "text/xml";

/// Media type for JSON replies.
pub const MEDIA_JSON: &str = "application/json";

/// Charset used by the convenience wrappers.
pub const CHARSET_UTF8: &str = "utf-8";

/// A reply produced by a response function, before formatting.
///
/// Defaults to status 200 with no extra headers; the formatter supplies
/// `Content-Type` and `Content-Length`.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Rendered {
    /// A 200 reply with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// A reply with an explicit status.
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Wrap `f` as a [`Handler`] that replies with the given media type and
/// charset.
///
/// The resulting handler sets `Content-Type: <media>; charset=<charset>`,
/// invokes `f` for the body, sets `Content-Length` to the body's byte
/// length, and writes the body.
pub fn respond<F, Fut>(media_type: &str, charset: &str, f: F) -> Handler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Rendered> + Send + 'static,
{
    let content_type = format!("{media_type}; charset={charset}");
    Arc::new(move |request| {
        let content_type = content_type.clone();
        let body = f(request);
        Box::pin(async move {
            let rendered = body.await;
            format_response(&content_type, rendered)
        })
    })
}

/// [`respond`] preset for `text/xml; charset=utf-8`.
pub fn respond_xml<F, Fut>(f: F) -> Handler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Rendered> + Send + 'static,
{
    respond(MEDIA_XML, CHARSET_UTF8, f)
}

/// [`respond`] preset for `application/json; charset=utf-8`.
pub fn respond_json<F, Fut>(f: F) -> Handler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Rendered> + Send + 'static,
{
    respond(MEDIA_JSON, CHARSET_UTF8, f)
}

fn format_response(content_type: &str, rendered: Rendered) -> Response {
    let length = rendered.body.len();
    let mut response = Response::new(Body::from(rendered.body));
    *response.status_mut() = rendered.status;

    let headers = response.headers_mut();
    match HeaderValue::from_str(content_type) {
        Ok(value) => {
            headers.insert(CONTENT_TYPE, value);
        }
        Err(err) => {
            tracing::error!(content_type, error = %err, "invalid content type");
        }
    }
    headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
    for (name, value) in rendered.headers.iter() {
        headers.append(name.clone(), value.clone());
    }
    response
}
