//! Security subsystem.
//!
//! # Design Decisions
//! - Authentication is opt-in per handler, not a dispatch concern
//! - No trust in client input: digests are recomputed, never compared
//!   against anything the client controls

pub mod digest;

pub use digest::digest_matches;
