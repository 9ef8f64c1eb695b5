//! CLI administration tool for hash-shortener.
//!
//! Works offline: short codes are a pure function of the URL, so the code a
//! running server would assign can be computed without contacting it.
//!
//! # Usage
//!
//! ```bash
//! # Print the short code for one or more URLs
//! cargo run --bin admin -- code https://www.example.com/test
//!
//! # Use a non-default code length (must match the server's CODE_LENGTH)
//! cargo run --bin admin -- code --length 10 https://www.example.com/test
//!
//! # Check whether a URL would be accepted
//! cargo run --bin admin -- check "example.com"
//! ```
//!
//! # Environment Variables
//!
//! - `CODE_LENGTH` (optional): default for `--length`
//! - `BASE_URL` (optional): prefix used to print full short URLs

use hash_shortener::config::{MIN_CODE_LENGTH, load_from_env};
use hash_shortener::prelude::*;
use hash_shortener::utils::code_generator::MAX_CODE_LENGTH;
use hash_shortener::utils::url_validator::validate_url;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for hash-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the short code the server would assign
    Code {
        /// URLs to shorten
        #[arg(required = true)]
        urls: Vec<String>,

        /// Code length (defaults to CODE_LENGTH or 8)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check whether a URL passes validation
    Check {
        /// URL to check
        url: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env()?;

    match cli.command {
        Commands::Code { urls, length } => {
            let code_length = length.unwrap_or(config.code_length);
            print_codes(&urls, code_length, &config.base_url)
        }
        Commands::Check { url } => check_url(&url),
    }
}

/// Prints the short code and short URL for each input.
///
/// Fails after printing every line if any URL was rejected.
fn print_codes(urls: &[String], code_length: usize, base_url: &str) -> Result<()> {
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code_length) {
        anyhow::bail!(
            "length must be between {} and {}, got {}",
            MIN_CODE_LENGTH,
            MAX_CODE_LENGTH,
            code_length
        );
    }

    let service = LinkService::with_code_length(Arc::new(InMemoryLinkRepository::new()), code_length);
    let state = AppState::new(Arc::new(service), base_url);

    let mut failed = 0;
    for url in urls {
        match state.link_service.shorten(url) {
            Ok(code) => {
                println!(
                    "{}  {}  {}",
                    code.bright_green().bold(),
                    state.short_url(&code).cyan(),
                    url.dimmed()
                );
            }
            Err(e) => {
                failed += 1;
                println!("{}  {}  {}", "error".red().bold(), e, url.dimmed());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} URLs rejected", failed, urls.len());
    }

    Ok(())
}

/// Reports whether `url` would be accepted by the shorten endpoint.
fn check_url(url: &str) -> Result<()> {
    match validate_url(url) {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), "URL is valid".green());
            Ok(())
        }
        Err(e) => {
            let hint = match e {
                ShortenError::EmptyUrl => "the URL is empty or only whitespace",
                ShortenError::InvalidUrl => {
                    "the URL must be absolute with a scheme and a host, e.g. https://example.com"
                }
                ShortenError::NotFound => "",
            };
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            if !hint.is_empty() {
                println!("  {}", hint.yellow());
            }
            anyhow::bail!("validation failed")
        }
    }
}
