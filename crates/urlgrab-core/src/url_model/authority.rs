//! Splitting the URL text, as written, into host and path.

/// Host and path slices of a raw URL. Userinfo, port, query and fragment are
/// already stripped; nothing is decoded or normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParts<'a> {
    pub host: &'a str,
    pub path: &'a str,
}

/// Splits `raw` after its `scheme:` prefix of `scheme_len` bytes.
///
/// Returns `None` unless `//` follows the scheme immediately; a `//` that
/// appears later (e.g. inside the query) is not an authority.
pub fn split_raw(raw: &str, scheme_len: usize) -> Option<RawParts<'_>> {
    let rest = raw.get(scheme_len..)?.strip_prefix(':')?.strip_prefix("//")?;
    let rest = rest.split(&['?', '#'][..]).next().unwrap_or_default();
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    Some(RawParts {
        host: strip_port(strip_userinfo(authority)),
        path,
    })
}

fn strip_userinfo(authority: &str) -> &str {
    authority.rsplit_once('@').map_or(authority, |(_, host)| host)
}

fn strip_port(host_port: &str) -> &str {
    if host_port.starts_with('[') {
        return match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        };
    }
    host_port.split(':').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> Option<(&str, &str)> {
        let scheme_len = raw.find(':')?;
        split_raw(raw, scheme_len).map(|p| (p.host, p.path))
    }

    #[test]
    fn host_and_path_as_written() {
        assert_eq!(parts("http://Sub.Test.COM/Some/Path"), Some(("Sub.Test.COM", "/Some/Path")));
        assert_eq!(parts("http://a.com/x/../y"), Some(("a.com", "/x/../y")));
    }

    #[test]
    fn userinfo_port_query_fragment_stripped() {
        assert_eq!(
            parts("ftp://user:pw@10.1.2.3:21/pub/f?x=1#top"),
            Some(("10.1.2.3", "/pub/f"))
        );
        assert_eq!(parts("http://[::1]:8080/x"), Some(("[::1]", "/x")));
    }

    #[test]
    fn no_path() {
        assert_eq!(parts("http://example.com"), Some(("example.com", "")));
        assert_eq!(parts("http://example.com?q=a/b"), Some(("example.com", "")));
    }

    #[test]
    fn authority_only_right_after_scheme() {
        assert_eq!(parts("http:example.com/a?next=http://b.com"), None);
        assert_eq!(parts("http:/example.com/a?next=http://b.com"), None);
        assert_eq!(parts("mailto:someone@example.com"), None);
    }
}
