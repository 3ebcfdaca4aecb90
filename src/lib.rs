//! Minimal HTTP API scaffolding.
//!
//! A thin registration layer over Axum: handlers are registered under a
//! path tag (the first URL segment), a catch-all dispatch route resolves
//! each request to exactly one handler, and a response formatter sets
//! `Content-Type` and `Content-Length` uniformly.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────┐
//!                     │                API SERVER                 │
//!                     │                                           │
//!   Client Request    │  ┌────────┐   ┌──────────┐   ┌─────────┐  │
//!   ──────────────────┼─▶│  http  │──▶│ dispatch │──▶│ handler │  │
//!                     │  │ server │   │ registry │   │  (tag)  │  │
//!                     │  └────────┘   └──────────┘   └────┬────┘  │
//!                     │                                   │       │
//!   Client Response   │  ┌─────────┐                      │       │
//!   ◀─────────────────┼──│ respond │◀─────────────────────┘       │
//!                     │  └─────────┘                              │
//!                     │                                           │
//!                     │  ┌─────────────────────────────────────┐  │
//!                     │  │        Cross-Cutting Concerns       │  │
//!                     │  │  config · observability · security  │  │
//!                     │  └─────────────────────────────────────┘  │
//!                     └───────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod http;

// Example handlers
pub mod handlers;

// Cross-cutting concerns
pub mod observability;
pub mod security;

pub use config::{load_config, ServerConfig};
pub use dispatch::{handler, Handler, HandlerRegistry};
pub use http::{respond, respond_json, respond_xml, ApiServer, Rendered};
pub use security::digest_matches;
