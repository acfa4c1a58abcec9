//! `wpd assemble` – collect the downloaded page set into one PDF.

use anyhow::{Context, Result};
use std::path::PathBuf;
use wpd_core::assemble;
use wpd_core::config::WpdConfig;

pub fn run_assemble(cfg: &WpdConfig, out: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let out_dir = match out.or_else(|| cfg.output_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let output = output.unwrap_or_else(|| out_dir.join("writeup.pdf"));
    let title = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("writeup")
        .to_string();

    let summary = assemble::assemble_pdf(&out_dir, &output, &title)?;
    println!(
        "Assembled {} page(s) into {}.",
        summary.page_count,
        summary.output.display()
    );
    Ok(())
}
