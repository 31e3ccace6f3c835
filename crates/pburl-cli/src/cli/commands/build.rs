//! Build command: JSON descriptor to URL.

use anyhow::{Context, Result};
use pburl_core::config::PburlConfig;
use pburl_core::{obj_to_url, UrlDescriptor};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Build a URL from descriptor JSON.
///
/// An empty `baseUrl` falls back to the configured `base_url`, if any.
pub fn build_from_json(json: &str, cfg: &PburlConfig, custom_domain: bool) -> Result<String> {
    let mut obj: UrlDescriptor = serde_json::from_str(json).context("parse descriptor JSON")?;
    if custom_domain {
        obj.is_custom_domain = true;
    }
    if obj.base_url.is_empty() {
        if let Some(base) = &cfg.base_url {
            obj.base_url = base.clone();
        }
    }
    let url = obj_to_url(&obj, &cfg.url_config(custom_domain))?;
    Ok(url)
}

pub fn run_build(input: Option<&Path>, cfg: &PburlConfig, custom_domain: bool) -> Result<()> {
    let json = match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read descriptor from stdin")?;
            buf
        }
    };
    println!("{}", build_from_json(&json, cfg, custom_domain)?);
    Ok(())
}
