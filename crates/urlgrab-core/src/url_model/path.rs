//! Path part of a derived name.

/// Replaces every `/` of the raw URL path with `_`.
///
/// The path is taken as written: no percent-decoding and no dot-segment
/// resolution. An absent path (`http://example.com`) yields an empty component.
pub fn path_component(raw_path: &str) -> String {
    raw_path.replace('/', "_")
}
