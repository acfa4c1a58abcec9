//! `wpd fetch` – run the sequential page download.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;
use wpd_core::config::WpdConfig;
use wpd_core::page::{self, PageRange};
use wpd_core::{audit, fetch, save, sequence};

#[allow(clippy::too_many_arguments)]
pub fn run_fetch(
    cfg: &WpdConfig,
    url: Option<String>,
    pages: Option<u32>,
    delay_ms: Option<u64>,
    out: Option<PathBuf>,
    headers: &[String],
    cookie: Option<String>,
    skip_existing: bool,
) -> Result<()> {
    let endpoint = match url.or_else(|| cfg.endpoint.clone()) {
        Some(u) => u,
        None => bail!("no endpoint URL given and none configured"),
    };
    let endpoint =
        Url::parse(&endpoint).with_context(|| format!("invalid endpoint URL: {}", endpoint))?;

    let page_count = pages.unwrap_or(cfg.page_count);
    let delay = Duration::from_millis(delay_ms.unwrap_or(cfg.delay_ms));
    let out_dir = match out.or_else(|| cfg.output_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let header_list = build_header_list(headers, cookie)?;

    let range = PageRange::through(page_count);
    if range.is_empty() {
        println!("No pages requested (page count is 0).");
        return Ok(());
    }

    let page_list: Vec<u32> = if skip_existing {
        audit::missing_pages(&out_dir, range.pages())
    } else {
        range.pages().collect()
    };
    if page_list.is_empty() {
        println!(
            "Nothing to fetch: all {} page(s) already present in {}.",
            range.len(),
            out_dir.display()
        );
        return Ok(());
    }

    tracing::info!(
        "fetching {} page(s) from {} into {} ({} ms between requests)",
        page_list.len(),
        endpoint,
        out_dir.display(),
        delay.as_millis()
    );

    let report = sequence::run_sequence(
        &page_list,
        delay,
        |p| fetch::fetch_page(page::page_url(&endpoint, p).as_str(), &header_list),
        |p, blob| save::save_blob(&out_dir, &page::page_filename(p), &blob),
    );

    println!(
        "Downloaded {} of {} page(s) to {}.",
        report.completed.len(),
        page_list.len(),
        out_dir.display()
    );
    if !report.is_complete() {
        for failure in &report.failed {
            println!("  page {}: {}", failure.page, failure.error);
        }
        bail!(
            "{} page(s) failed; re-run with --skip-existing to fetch only the missing ones",
            report.failed.len()
        );
    }
    Ok(())
}

/// Request headers in the order given on the command line, the cookie last.
/// Duplicate names are kept; the server sees them all.
fn build_header_list(headers: &[String], cookie: Option<String>) -> Result<Vec<(String, String)>> {
    let mut list = Vec::with_capacity(headers.len() + 1);
    for raw in headers {
        list.push(parse_header(raw)?);
    }
    if let Some(cookie) = cookie {
        list.push(("Cookie".to_string(), cookie));
    }
    Ok(list)
}

/// Parses one `--header` argument of the form "Name: value".
fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("invalid header {:?}: expected \"Name: value\"", raw),
    }
}
