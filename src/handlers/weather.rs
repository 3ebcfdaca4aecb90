//! NOAA current-observation proxy handler.
//!
//! Answers `GET /weather/<station-id>` by fetching the station's current
//! conditions from the NOAA XML feed and relaying them. Errors are
//! reported inside structured `<error>` bodies so clients always get
//! well-formed XML.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::http::respond::Rendered;

/// Dispatch tag this handler is conventionally registered under.
pub const WEATHER_TAG: &str = "weather";

/// NOAA current-observations feed; station files live at `<id>.xml`.
const NOAA_CURRENT_OBS_URL: &str = "http://w1.weather.gov/xml/current_obs";

/// Stylesheet processing instruction NOAA embeds in every reply. It
/// confuses some clients, so it is stripped from relayed bodies.
pub const STYLESHEET_PI: &str =
    "<?xml-stylesheet href=\"latest_ob.xsl\" type=\"text/xsl\"?>";

/// Proxy for the NOAA current-observations feed.
#[derive(Debug, Clone)]
pub struct WeatherHandler {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherHandler {
    /// A handler fetching from `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// A handler pointed at the real NOAA feed.
    pub fn noaa() -> Self {
        Self::new(NOAA_CURRENT_OBS_URL)
    }

    /// Look up the current weather for the station named in the request
    /// path and relay it as XML.
    pub async fn current_observation(&self, request: Request<Body>) -> Rendered {
        let Some(station) = station_id(request.uri().path()) else {
            return Rendered::new("<error>Please specify a NOAA station id</error>");
        };

        let url = format!("{}/{}.xml", self.base_url.trim_end_matches('/'), station);
        match self.client.get(&url).send().await {
            Ok(upstream) => render_upstream(upstream, station).await,
            Err(err) => {
                tracing::error!(station, error = %err, "could not reach the NOAA server");
                upstream_unreachable(station)
            }
        }
    }
}

async fn render_upstream(upstream: reqwest::Response, station: &str) -> Rendered {
    let status = upstream.status().as_u16();
    if status != 200 {
        // Usually a 404, which means the station id is invalid. Relayed
        // as a structured error body, not a local error status.
        tracing::warn!(station, status, "problem finding weather for NOAA station id");
        return Rendered::new(format!(
            "<error status=\"{status}\">Could not get weather for NOAA station id {station}</error>"
        ));
    }

    match upstream.text().await {
        Ok(body) => {
            tracing::info!(station, "found current weather for NOAA station id");
            Rendered::new(body.replace(STYLESHEET_PI, ""))
        }
        Err(err) => {
            tracing::error!(station, error = %err, "failed to read NOAA reply");
            upstream_unreachable(station)
        }
    }
}

fn upstream_unreachable(station: &str) -> Rendered {
    Rendered::with_status(
        StatusCode::BAD_GATEWAY,
        format!(
            "<error status=\"502\">Could not get weather for NOAA station id {station}</error>"
        ),
    )
}

/// The station id is the path segment after the tag, e.g.
/// `/weather/KSFO` -> `KSFO`.
fn station_id(path: &str) -> Option<&str> {
    path.split('/').nth(2).filter(|segment| !segment.is_empty())
}
