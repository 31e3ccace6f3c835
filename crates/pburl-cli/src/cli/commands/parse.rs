//! Parse command: URL to pretty-printed JSON descriptor.

use anyhow::{Context, Result};
use pburl_core::{url_to_obj, UrlConfig};

/// Descriptor of `url` as pretty JSON.
pub fn parse_to_json(url: &str, config: &UrlConfig) -> Result<String> {
    let obj = url_to_obj(url, config).with_context(|| format!("parse {url}"))?;
    Ok(serde_json::to_string_pretty(&obj)?)
}

pub fn run_parse(url: &str, config: &UrlConfig) -> Result<()> {
    println!("{}", parse_to_json(url, config)?);
    Ok(())
}
