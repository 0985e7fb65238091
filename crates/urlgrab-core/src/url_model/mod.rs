//! URL modeling and output filename derivation.
//!
//! Maps a URL to a flat, deterministic relative path built from its host and
//! path: `http://sub.test.com/some/path` → `sub_test_com_some_path`.
//! Port, userinfo, query and fragment never contribute to the name.

mod authority;
mod error;
mod host;
mod path;
mod syntax;

pub use authority::{split_raw, RawParts};
pub use error::UrlError;
pub use host::host_component;
pub use path::path_component;
pub use syntax::check_uri_syntax;

use std::fmt;
use std::path::{Path, PathBuf};

/// Relative output path computed from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedPath(String);

impl DerivedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The target file for this name inside `dir`.
    pub fn under(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl fmt::Display for DerivedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for DerivedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Derives the output name for `url`.
///
/// Pure and deterministic: no network or filesystem access. Fails when the
/// string is not a well-formed absolute URL or has no host.
///
/// # Examples
///
/// - `derive_path("http://sub.test.com/some/path")` → `"sub_test_com_some_path"`
/// - `derive_path("https://www.hello-world.com/temp")` → `"hello-world_com_temp"`
pub fn derive_path(url: &str) -> Result<DerivedPath, UrlError> {
    check_uri_syntax(url)?;
    let parsed = url::Url::parse(url).map_err(|source| UrlError::Parse {
        url: url.to_string(),
        source,
    })?;

    // The parse only validates; names come from the text as written.
    let raw = match (parsed.host_str(), split_raw(url, parsed.scheme().len())) {
        (Some(_), Some(raw)) if !raw.host.is_empty() => raw,
        _ => {
            return Err(UrlError::NoHost {
                url: url.to_string(),
            })
        }
    };

    let mut name = host_component(raw.host);
    name.push_str(&path_component(raw.path));
    Ok(DerivedPath(name))
}

/// Derives names for a list of URLs, keeping each result next to its input.
pub fn derive_paths<'a, I>(urls: I) -> Vec<(&'a str, Result<DerivedPath, UrlError>)>
where
    I: IntoIterator<Item = &'a str>,
{
    urls.into_iter().map(|u| (u, derive_path(u))).collect()
}
