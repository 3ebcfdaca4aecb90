//! POST-echo logger handler.
//!
//! Answers `POST /logger` by echoing the form fields back as
//! `name=value1,value2` strings inside a JSON envelope. Anything other
//! than a well-formed POST gets the problem envelope with empty data.

use axum::body::Body;
use axum::http::{Method, Request};
use serde::Serialize;

use crate::http::respond::Rendered;

/// Dispatch tag this handler is conventionally registered under.
pub const LOGGER_TAG: &str = "logger";

const PROBLEM_STATUS: &str = "Sorry, there was a problem";

/// JSON envelope for logger replies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message {
    status: String,
    data: Vec<String>,
}

/// Echo the fields of a form-encoded POST back as JSON.
pub async fn log_post_data(request: Request<Body>) -> Rendered {
    if request.method() != Method::POST {
        return problem_reply();
    }

    let body = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read POST body");
            return problem_reply();
        }
    };

    // Group repeated field names, preserving first-seen order.
    let mut fields: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in form_urlencoded::parse(body.as_ref()) {
        if let Some(entry) = fields.iter_mut().find(|entry| entry.0 == name.as_ref()) {
            entry.1.push(value.into_owned());
        } else {
            fields.push((name.into_owned(), vec![value.into_owned()]));
        }
    }

    let data = fields
        .into_iter()
        .map(|(name, values)| format!("{}={}", name, values.join(",")))
        .collect();

    render_message(Message {
        status: "ok".to_string(),
        data,
    })
}

fn problem_reply() -> Rendered {
    render_message(Message {
        status: PROBLEM_STATUS.to_string(),
        data: Vec::new(),
    })
}

fn render_message(message: Message) -> Rendered {
    match serde_json::to_string(&message) {
        Ok(body) => Rendered::new(body),
        Err(err) => {
            // Still answer with a well-formed envelope rather than abort.
            tracing::error!(error = %err, "failed to encode logger reply");
            Rendered::new(format!(
                "{{\"Status\":\"{PROBLEM_STATUS}\",\"Data\":[]}}"
            ))
        }
    }
}
