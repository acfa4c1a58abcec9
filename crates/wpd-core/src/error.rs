//! Per-page error type for the fetch-save loop.

use std::path::PathBuf;
use thiserror::Error;

/// Error for a single page: curl failure, non-2xx status, or save failure.
/// A `PageError` never aborts the run; it is recorded and the loop moves on.
#[derive(Debug, Error)]
pub enum PageError {
    /// Curl reported an error (connection, DNS, TLS, etc.).
    #[error("request failed: {0}")]
    Request(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Writing the page file failed (e.g. disk full, permission denied).
    #[error("could not save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
