//! Output-directory audit: which expected pages are missing.
//!
//! A failed page leaves a hole in the numbered set; this finds the holes so
//! a re-run can fetch only what is absent.

use crate::page::page_filename;
use std::path::Path;

/// Pages from `pages` that have no saved file under `dir`, in input order.
/// A directory that does not exist has every page missing.
pub fn missing_pages(dir: &Path, pages: impl IntoIterator<Item = u32>) -> Vec<u32> {
    pages
        .into_iter()
        .filter(|page| !dir.join(page_filename(*page)).is_file())
        .collect()
}
