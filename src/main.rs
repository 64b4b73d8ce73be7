//! CLI entry point for the filefetch tool.

use anyhow::{Context, Result};
use clap::Parser;
use filefetch::{HttpClient, RequestSpec};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let Some(url) = args.url else {
        info!("No URL provided.");
        info!("Example: filefetch https://example.com/file.bin -o file.bin");
        return Ok(());
    };

    let mut spec = RequestSpec::new(&url);
    for raw in &args.headers {
        let (name, value) =
            cli::parse_header(raw).with_context(|| format!("invalid --header '{raw}'"))?;
        spec = spec.header(name, value);
    }
    for raw in &args.cookies {
        let (name, value) =
            cli::parse_cookie(raw).with_context(|| format!("invalid --cookie '{raw}'"))?;
        spec = spec.cookie(name, value);
    }

    let client = match args.user_agent {
        Some(user_agent) => HttpClient::with_user_agent(user_agent),
        None => HttpClient::new(),
    };

    let dest = args
        .output
        .unwrap_or_else(|| cli::default_output_name(&url));

    let bytes_written = if args.force {
        client.force_download(&dest, &spec).await?
    } else {
        client.download_to_file(&dest, &spec).await?
    };

    if bytes_written == 0 {
        info!(path = %dest.display(), "up to date");
    } else {
        info!(path = %dest.display(), bytes = bytes_written, "download finished");
    }

    Ok(())
}
