//! Host part of a derived name.

const WWW_PREFIX: &str = "www.";

/// Strips one leading `www.` and replaces every `.` with `_`.
pub fn host_component(host: &str) -> String {
    host.strip_prefix(WWW_PREFIX).unwrap_or(host).replace('.', "_")
}
