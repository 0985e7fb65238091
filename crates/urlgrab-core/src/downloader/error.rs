//! Transfer error type and its classification into outcome failure kinds.

use crate::task::FailureKind;

/// Error returned by a single transfer (curl failure, HTTP error, or local write failure).
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection, protocol, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Creating or writing the target file failed (disk full, permission denied, ...).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return FailureKind::Connection;
    }
    if e.is_write_error() {
        return FailureKind::Storage;
    }
    FailureKind::Other
}

/// Classify a transfer error into the kind recorded on the outcome.
pub fn classify(e: &TransferError) -> FailureKind {
    match e {
        TransferError::Curl(ce) => classify_curl_error(ce),
        TransferError::Http(code) => FailureKind::HttpStatus(*code),
        TransferError::Storage(_) => FailureKind::Storage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_kept() {
        assert_eq!(classify(&TransferError::Http(404)), FailureKind::HttpStatus(404));
        assert_eq!(classify(&TransferError::Http(503)), FailureKind::HttpStatus(503));
    }

    #[test]
    fn storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(classify(&TransferError::Storage(io)), FailureKind::Storage);
    }

    #[test]
    fn curl_codes() {
        // CURLE_OPERATION_TIMEDOUT, CURLE_COULDNT_CONNECT, CURLE_PARTIAL_FILE, CURLE_WRITE_ERROR
        assert_eq!(classify_curl_error(&curl::Error::new(28)), FailureKind::Timeout);
        assert_eq!(classify_curl_error(&curl::Error::new(7)), FailureKind::Connection);
        assert_eq!(classify_curl_error(&curl::Error::new(18)), FailureKind::Connection);
        assert_eq!(classify_curl_error(&curl::Error::new(23)), FailureKind::Storage);
    }

    #[test]
    fn display() {
        assert_eq!(TransferError::Http(404).to_string(), "HTTP 404");
    }
}
