//! Single-stream fetch of a URL straight into a local file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use super::error::TransferError;

/// Abort when throughput stays below this many bytes/s for the read timeout.
const STALL_BYTES_PER_SEC: u32 = 1;

/// Curl settings for one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    /// Time allowed to establish the connection.
    pub connect_timeout: Duration,
    /// Time the transfer may stall (no data) before it is aborted.
    pub read_timeout: Duration,
    pub follow_redirects: bool,
    pub max_redirections: u32,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(10),
            follow_redirects: true,
            max_redirections: 10,
        }
    }
}

/// GETs `url` and writes the body to `target`, creating or truncating it.
/// Returns the number of bytes written.
///
/// Non-2xx responses fail only for `http`/`https` URLs; other schemes report
/// protocol reply codes that are not HTTP statuses. Leaves whatever was written
/// on failure; the caller owns cleanup.
pub fn fetch_to_file(
    url: &str,
    target: &Path,
    opts: &TransferOptions,
) -> Result<u64, TransferError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(opts.follow_redirects)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.low_speed_limit(STALL_BYTES_PER_SEC)?;
    easy.low_speed_time(opts.read_timeout)?;

    let mut file = File::create(target)?;
    let mut written: u64 = 0;
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Err(e) = performed {
        if e.is_write_error() {
            if let Some(io_err) = write_error.take() {
                return Err(TransferError::Storage(io_err));
            }
        }
        return Err(TransferError::Curl(e));
    }

    if is_http(url) {
        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransferError::Http(code));
        }
    }

    file.flush()?;
    Ok(written)
}

fn is_http(url: &str) -> bool {
    let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or_default();
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}
