//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, catch-all dispatch route)
//!     → dispatch registry (tag → handler)
//!     → respond.rs (Content-Type / Content-Length formatting)
//!     → Send to client
//! ```

pub mod request;
pub mod respond;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use respond::{
    respond, respond_json, respond_xml, Rendered, CHARSET_UTF8, MEDIA_JSON, MEDIA_XML,
};
pub use server::{ApiServer, ServeError};
