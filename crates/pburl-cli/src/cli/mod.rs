//! CLI for the pburl URL codec.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pburl_core::config;
use std::path::PathBuf;

use commands::{run_build, run_parse, run_sign};

/// Top-level CLI for parsing, building and signing transformation URLs.
#[derive(Debug, Parser)]
#[command(name = "pburl")]
#[command(about = "pburl: convert Pixelbin transformation URLs to and from JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a transformation URL and print it as JSON.
    Parse {
        /// Full URL, e.g. https://cdn.pixelbin.io/v2/<cloud>/t.resize()/a.jpeg
        url: String,

        /// Treat the URL as a custom-domain URL (no cloud name segment).
        #[arg(long)]
        custom_domain: bool,
    },

    /// Build a URL from a JSON descriptor read from a file or stdin.
    Build {
        /// JSON file; omit or pass `-` to read stdin.
        input: Option<PathBuf>,

        /// Build a custom-domain URL regardless of `isCustomDomain` in the input.
        #[arg(long)]
        custom_domain: bool,
    },

    /// Append a time-limited signature to a URL.
    Sign {
        url: String,

        /// Seconds from now until the signature expires.
        #[arg(long, value_name = "SECS")]
        expiry: u64,

        /// Access key id, sent as `pbt`.
        #[arg(long)]
        access_key: String,

        /// Secret used as the HMAC key.
        #[arg(long)]
        token: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, custom_domain } => {
                run_parse(&url, &cfg.url_config(custom_domain))?
            }
            CliCommand::Build {
                input,
                custom_domain,
            } => run_build(input.as_deref(), &cfg, custom_domain)?,
            CliCommand::Sign {
                url,
                expiry,
                access_key,
                token,
            } => run_sign(&url, expiry, &access_key, &token)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
