//! Saving one fetched blob as a file.
//!
//! Writes to `<name>.part` first and renames into place, so an interrupted
//! run never leaves a truncated page file behind.

use crate::error::PageError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `bytes` under `dir/filename`, creating `dir` if needed.
/// Returns the final path on success.
pub fn save_blob(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, PageError> {
    let final_path = dir.join(filename);
    let save_err = |source: std::io::Error| PageError::Save {
        path: final_path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(save_err)?;

    let mut temp_path = final_path.as_os_str().to_owned();
    temp_path.push(".part");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, bytes).map_err(save_err)?;
    fs::rename(&temp_path, &final_path).map_err(save_err)?;
    Ok(final_path)
}
