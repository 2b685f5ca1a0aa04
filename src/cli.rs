// src/cli.rs
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};

use crate::{
    analysis::analyze,
    config::options::{AppOptions, FetchOptions, OutputFormat},
    extract::HttpExtractor,
    progress::Progress,
    rates::RateTable,
    report,
};

/// Estimate what it would cost to build and run a website.
#[derive(Debug, Parser)]
#[command(name = "site_cost", version, about)]
pub struct Args {
    /// Absolute http:// or https:// address to analyze
    pub url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = crate::config::consts::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Frontend hourly rate (USD)
    #[arg(long)]
    pub frontend_rate: Option<f64>,

    /// Backend hourly rate (USD)
    #[arg(long)]
    pub backend_rate: Option<f64>,

    /// Base monthly hosting cost (USD)
    #[arg(long)]
    pub hosting_cost: Option<f64>,

    /// Monthly maintenance as a fraction of development cost
    #[arg(long)]
    pub maintenance: Option<f64>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// No progress lines on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn options(&self) -> Result<AppOptions> {
        let rates = RateTable::default()
            .with_overrides(self.frontend_rate, self.backend_rate, self.hosting_cost, self.maintenance)
            .wrap_err("invalid rate override")?;
        Ok(AppOptions {
            fetch: FetchOptions::default().with_timeout_secs(self.timeout),
            rates,
            output: self.format,
        })
    }
}

/// Progress lines on stderr, so stdout stays clean for `--format json`.
struct CliProgress {
    quiet: bool,
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.done += 1;
        if !self.quiet {
            eprintln!("[{}/{}] {}", self.done.min(self.total), self.total, msg);
        }
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    let opts = args.options()?;
    let url = args.url.trim();
    logf!("CLI: url={url} format={:?} timeout={:?}", opts.output, opts.fetch.timeout);

    let extractor = HttpExtractor::new(opts.fetch.clone());
    let mut prog = CliProgress { quiet: args.quiet, done: 0, total: 0 };

    let analysis = analyze(url, &extractor, &opts.rates, Some(&mut prog))
        .map_err(|e| {
            let msg = e.user_message();
            Report::new(e).wrap_err(msg)
        })?;

    let out = match opts.output {
        OutputFormat::Table => report::render_text(&analysis),
        OutputFormat::Json => report::to_json(&analysis).wrap_err("serializing analysis")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_populate_options() {
        let args = Args::parse_from([
            "site_cost",
            "https://example.com",
            "--format",
            "json",
            "--timeout",
            "5",
            "--frontend-rate",
            "100",
            "-q",
        ]);
        let opts = args.options().unwrap();
        assert_eq!(opts.output, OutputFormat::Json);
        assert_eq!(opts.fetch.timeout, std::time::Duration::from_secs(5));
        assert_eq!(opts.rates.frontend_hourly_rate(), 100.0);
        assert_eq!(opts.rates.backend_hourly_rate(), 85.0);
        assert!(args.quiet);
    }

    #[test]
    fn defaults_match_rate_card() {
        let args = Args::parse_from(["site_cost", "https://example.com"]);
        let opts = args.options().unwrap();
        assert_eq!(opts, AppOptions::default());
    }

    #[test]
    fn bad_override_is_rejected() {
        let args = Args::parse_from(["site_cost", "https://example.com", "--maintenance", "2"]);
        assert!(args.options().is_err());
    }
}
