//! Path tag extraction.
//!
//! # Responsibilities
//! - Extract the dispatch key (the "tag") from a request path
//!
//! # Design Decisions
//! - Split on `/`, drop the empty leading token, take the first remaining
//!   token; anything shorter resolves to the empty (default) tag
//! - No allocation: the tag borrows from the path

/// Tag reserved for the fallback handler.
pub const DEFAULT_TAG: &str = "";

/// Extract the handler tag from a request path.
///
/// The tag is the first path segment, e.g. `/weather/KSFO` -> `weather`.
/// Paths with no first segment (`""`, `/`, `//...`) yield [`DEFAULT_TAG`].
pub fn handler_tag(path: &str) -> &str {
    let mut segments = path.split('/');
    match segments.next() {
        // Absolute path: the split yields a leading empty token before the
        // first `/`, so the tag is the next token.
        Some("") => segments.next().unwrap_or(DEFAULT_TAG),
        Some(first) => first,
        None => DEFAULT_TAG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment_is_tag() {
        assert_eq!(handler_tag("/weather/KSFO"), "weather");
        assert_eq!(handler_tag("/logger"), "logger");
        assert_eq!(handler_tag("/edit/blah"), "edit");
    }

    #[test]
    fn test_short_paths_resolve_to_default() {
        assert_eq!(handler_tag(""), DEFAULT_TAG);
        assert_eq!(handler_tag("/"), DEFAULT_TAG);
    }

    #[test]
    fn test_double_slash_resolves_to_default() {
        // The segment between the two slashes is empty.
        assert_eq!(handler_tag("//weather"), DEFAULT_TAG);
    }

    #[test]
    fn test_trailing_slash_keeps_tag() {
        assert_eq!(handler_tag("/weather/"), "weather");
    }

    #[test]
    fn test_relative_path_uses_first_token() {
        assert_eq!(handler_tag("weather/KSFO"), "weather");
    }
}
