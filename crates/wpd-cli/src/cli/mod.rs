//! CLI for the WPD writeup page downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wpd_core::config;

use commands::{run_assemble, run_audit, run_fetch};

/// Top-level CLI for the WPD writeup page downloader.
#[derive(Debug, Parser)]
#[command(name = "wpd")]
#[command(about = "WPD: sequential writeup page downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download pages 1..N of a paginated endpoint, in order, one at a time.
    Fetch {
        /// Endpoint URL; the page number is filled in as the `page` query
        /// parameter. Falls back to the configured endpoint when omitted.
        url: Option<String>,

        /// Number of pages to fetch (default from config).
        #[arg(long, value_name = "N")]
        pages: Option<u32>,

        /// Delay between consecutive requests in milliseconds (default from config).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Output directory for the numbered page files (default from config, else cwd).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Extra request header as "Name: value". Repeatable.
        #[arg(long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Session cookie header value (e.g. "session=abc123").
        #[arg(long, value_name = "VALUE")]
        cookie: Option<String>,

        /// Only fetch pages whose file is not already in the output directory.
        #[arg(long)]
        skip_existing: bool,
    },

    /// Assemble the downloaded page set into one PDF, in numeric order.
    Assemble {
        /// Directory holding the numbered page files (default from config, else cwd).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Output PDF path (default "<DIR>/writeup.pdf").
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List expected pages missing from the output directory.
    Audit {
        /// Number of pages expected (default from config).
        #[arg(long, value_name = "N")]
        pages: Option<u32>,

        /// Output directory to audit (default from config, else cwd).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                pages,
                delay_ms,
                out,
                headers,
                cookie,
                skip_existing,
            } => run_fetch(&cfg, url, pages, delay_ms, out, &headers, cookie, skip_existing)?,
            CliCommand::Assemble { out, output } => run_assemble(&cfg, out, output)?,
            CliCommand::Audit { pages, out } => run_audit(&cfg, pages, out)?,
        }

        Ok(())
    }
}
