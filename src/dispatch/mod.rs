//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → tag.rs (extract first path segment)
//!     → registry.rs (tag → handler lookup)
//!     → Return: matched handler, or default handler on a miss
//! ```
//!
//! # Design Decisions
//! - The registry is handed to the server at startup and never mutated
//!   after; dispatch is pure lookup
//! - Exactly one handler runs per request; no chaining, no middleware

pub mod registry;
pub mod tag;

pub use registry::{handler, Handler, HandlerFuture, HandlerRegistry};
pub use tag::{handler_tag, DEFAULT_TAG};
