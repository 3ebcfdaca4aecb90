//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to the server bootstrap
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the server never rereads it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, ServerConfig, TimeoutConfig, DEFAULT_READ_TIMEOUT_SECS,
};
pub use validation::{validate_config, ValidationError, ValidationErrors};
