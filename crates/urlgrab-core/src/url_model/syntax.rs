//! Strict character-level URI checks.
//!
//! The `url` crate follows the WHATWG parser, which silently percent-encodes
//! spaces and other illegal characters. Derived names must only come from
//! well-formed URIs, so those are rejected here before parsing.

use super::error::UrlError;

/// Characters excluded from URIs regardless of position.
const EXCLUDED: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// Rejects raw whitespace, control characters, excluded punctuation and
/// malformed `%XX` escapes.
pub fn check_uri_syntax(url: &str) -> Result<(), UrlError> {
    let bytes = url.as_bytes();
    for (index, ch) in url.char_indices() {
        if ch.is_whitespace() || ch.is_control() || EXCLUDED.contains(&ch) {
            return Err(UrlError::IllegalCharacter {
                url: url.to_string(),
                ch,
                index,
            });
        }
        if ch == '%' {
            let well_formed = bytes
                .get(index + 1..index + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(UrlError::MalformedEscape {
                    url: url.to_string(),
                    index,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_urls() {
        assert!(check_uri_syntax("http://sub.test.com/some/path").is_ok());
        assert!(check_uri_syntax("ftp://10.123.234.254:23/public/file").is_ok());
        assert!(check_uri_syntax("https://example.com/a%20b?x=1#frag").is_ok());
    }

    #[test]
    fn rejects_embedded_space() {
        let err = check_uri_syntax("http://sub.test.com/some/path/f i l e").unwrap_err();
        assert_eq!(
            err,
            UrlError::IllegalCharacter {
                url: "http://sub.test.com/some/path/f i l e".to_string(),
                ch: ' ',
                index: 31,
            }
        );
    }

    #[test]
    fn rejects_excluded_and_control() {
        assert!(check_uri_syntax("http://a.com/{x}").is_err());
        assert!(check_uri_syntax("http://a.com/a|b").is_err());
        assert!(check_uri_syntax("http://a.com/\tx").is_err());
    }

    #[test]
    fn rejects_bad_escapes() {
        assert!(matches!(
            check_uri_syntax("http://a.com/%zz"),
            Err(UrlError::MalformedEscape { index: 13, .. })
        ));
        assert!(matches!(
            check_uri_syntax("http://a.com/%4"),
            Err(UrlError::MalformedEscape { .. })
        ));
    }
}
