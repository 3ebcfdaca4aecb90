//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; every subsystem logs with fields
//! - The request ID assigned in the HTTP layer appears on responses so
//!   clients can quote it back

pub mod logging;
