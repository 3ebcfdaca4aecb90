//! Example handlers built on the dispatch and response layers.
//!
//! These show the two common handler shapes: a proxy that relays a
//! third-party feed (weather) and an endpoint that consumes the request
//! body (logger). Neither is required by the scaffolding itself.

pub mod logger;
pub mod weather;

pub use logger::{log_post_data, LOGGER_TAG};
pub use weather::{WeatherHandler, STYLESHEET_PI, WEATHER_TAG};
