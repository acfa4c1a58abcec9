//! The sequential fetch-save loop.
//!
//! One page at a time, in increasing order: fetch the blob, save it, wait a
//! fixed delay, move on. A failed page is logged and recorded, never fatal;
//! the delay separates consecutive requests regardless of outcome and is
//! skipped after the final page.
//!
//! Fetch, save, and sleep are injected so tests can drive the loop without a
//! network, a filesystem, or real time.

use crate::error::PageError;
use std::path::PathBuf;
use std::time::Duration;

/// One failed page and why it failed.
#[derive(Debug)]
pub struct PageFailure {
    pub page: u32,
    pub error: PageError,
}

/// Outcome of a full run: which pages were saved and which failed.
#[derive(Debug, Default)]
pub struct SequenceReport {
    /// Successfully saved pages, in completion (= increasing) order.
    pub completed: Vec<u32>,
    /// Failed pages, in order of failure.
    pub failed: Vec<PageFailure>,
}

impl SequenceReport {
    /// True when every attempted page was saved.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the fetch-save loop over `pages` with a real `thread::sleep` delay.
///
/// `pages` must be in strictly increasing order; each index is attempted
/// exactly once. Returns only after every page has been attempted.
pub fn run_sequence<F, S>(pages: &[u32], delay: Duration, fetch: F, save: S) -> SequenceReport
where
    F: FnMut(u32) -> Result<Vec<u8>, PageError>,
    S: FnMut(u32, Vec<u8>) -> Result<PathBuf, PageError>,
{
    run_with_sleep(pages, delay, fetch, save, std::thread::sleep)
}

/// Like [`run_sequence`] but with an injected sleep, so tests can observe
/// delay scheduling instead of waiting it out.
pub fn run_with_sleep<F, S, D>(
    pages: &[u32],
    delay: Duration,
    mut fetch: F,
    mut save: S,
    mut sleep: D,
) -> SequenceReport
where
    F: FnMut(u32) -> Result<Vec<u8>, PageError>,
    S: FnMut(u32, Vec<u8>) -> Result<PathBuf, PageError>,
    D: FnMut(Duration),
{
    let mut report = SequenceReport::default();

    for (i, &page) in pages.iter().enumerate() {
        match fetch(page).and_then(|blob| save(page, blob)) {
            Ok(path) => {
                tracing::info!("downloaded page {} -> {}", page, path.display());
                report.completed.push(page);
            }
            Err(error) => {
                tracing::error!("error downloading page {}: {}", page, error);
                report.failed.push(PageFailure { page, error });
            }
        }

        if i + 1 < pages.len() {
            sleep(delay);
        }
    }

    report
}
