use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{error::ErrorKind, ArgAction, Parser};
use tracing::{debug, Level};

mod activity;
use activity::write_report;

mod config;
use config::ActivityConfig;

mod github;
use github::GitHubClient;

#[cfg(test)]
mod testing;

const USAGE: &str = "Usage: github-activity <username>";

/// Show the recent public activity of a GitHub user
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// GitHub username
    username: String,

    /// Log more details to stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Returns `None` when the arguments don't make sense, in which case the usage should be shown.
///
/// `--help` and `--version` are reported as errors, so that clap can handle them.
fn parse_opts<I, T>(args: I) -> Result<Option<Opts>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Opts::try_parse_from(args) {
        Ok(opts) => Ok(Some(opts)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(_) => Ok(None),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Fetches and prints the activity of `username`, and returns the process exit status.
async fn run<W: Write>(
    username: &str,
    config: &ActivityConfig,
    out: &mut W,
) -> anyhow::Result<u8> {
    let client = GitHubClient::new(config).context("couldn't build HTTP client")?;

    let events = match client.user_events(username, config.timeout).await {
        Ok(events) => events,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(1);
        }
    };

    write_report(out, username, &events, config.window).context("couldn't write report")?;

    Ok(0)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let opts = match parse_opts(std::env::args_os()) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            println!("{}", USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => e.exit(),
    };

    init_tracing(opts.verbose);

    let config = ActivityConfig::default();
    debug!("using {:?}", config);

    let stdout = io::stdout();
    let status = run(&opts.username, &config, &mut stdout.lock()).await?;

    Ok(ExitCode::from(status))
}
