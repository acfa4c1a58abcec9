//! `wpd audit` – list expected pages missing from the output directory.

use anyhow::{Context, Result};
use std::path::PathBuf;
use wpd_core::audit;
use wpd_core::config::WpdConfig;
use wpd_core::page::{page_filename, PageRange};

pub fn run_audit(cfg: &WpdConfig, pages: Option<u32>, out: Option<PathBuf>) -> Result<()> {
    let page_count = pages.unwrap_or(cfg.page_count);
    let out_dir = match out.or_else(|| cfg.output_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let range = PageRange::through(page_count);
    let missing = audit::missing_pages(&out_dir, range.pages());
    if missing.is_empty() {
        println!("All {} page(s) present in {}.", range.len(), out_dir.display());
    } else {
        println!(
            "{} of {} page(s) missing from {}:",
            missing.len(),
            range.len(),
            out_dir.display()
        );
        for page in &missing {
            println!("  {}", page_filename(*page));
        }
    }
    Ok(())
}
