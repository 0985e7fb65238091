//! Error type for URL → filename derivation.

/// Why a URL could not be turned into a derived path.
///
/// Raised before any network or filesystem activity takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// A character that is never legal in a URI (whitespace, control, `<`, `{`, ...).
    #[error("illegal character {ch:?} at index {index} in URL: {url}")]
    IllegalCharacter { url: String, ch: char, index: usize },

    /// A `%` that is not followed by two hex digits.
    #[error("malformed escape at index {index} in URL: {url}")]
    MalformedEscape { url: String, index: usize },

    /// The string is not an absolute URL.
    #[error("invalid URL {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no usable host.
    #[error("cannot resolve host: {url}")]
    NoHost { url: String },
}
