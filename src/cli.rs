//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use url::Url;

/// Fetch an HTTP resource to a local file, skipping same-size copies.
///
/// Filefetch downloads one URL per invocation. When the destination file
/// already exists and its size matches the server's Content-Length, the
/// transfer is skipped.
#[derive(Parser, Debug)]
#[command(name = "filefetch")]
#[command(author, version, about)]
pub struct Args {
    /// URL to download
    pub url: Option<String>,

    /// Destination file path (defaults to the last URL path segment)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra header in 'Name: value' form (repeatable; overrides defaults of the same name)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Cookie in 'name=value' form (repeatable; attached in order)
    #[arg(short = 'b', long = "cookie", value_name = "NAME=VALUE")]
    pub cookies: Vec<String>,

    /// Override the User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Always download, even when the local size matches the remote length
    #[arg(short, long)]
    pub force: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Splits a `-H 'Name: value'` argument into a header pair.
///
/// # Errors
///
/// Returns an error when the separator is missing or the name is empty.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("expected 'Name: value', got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("header name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Splits a `-b 'name=value'` argument into a cookie pair.
///
/// # Errors
///
/// Returns an error when the separator is missing or the name is empty.
pub fn parse_cookie(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected 'name=value', got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("cookie name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Derives a destination filename from the URL's last path segment.
///
/// Falls back to `download.bin` for URLs without a usable segment.
#[must_use]
pub fn default_output_name(url: &str) -> PathBuf {
    let name = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| "download.bin".to_string());
    PathBuf::from(name)
}
