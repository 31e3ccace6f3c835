//! Shared helpers for the codec integration tests.

#![allow(dead_code)]

use pburl_core::{url_to_obj, obj_to_url, UrlConfig, UrlDescriptor};

pub const MANAGED_BASE: &str = "https://cdn.pixelbin.io";
pub const CUSTOM_BASE: &str = "https://cdn.twist.vision";

pub fn managed() -> UrlConfig {
    UrlConfig::default()
}

pub fn custom() -> UrlConfig {
    UrlConfig::custom_domain()
}

/// Parse, rebuild and re-parse `url`, asserting the rebuilt URL and both
/// descriptors agree.
pub fn assert_round_trip(url: &str, config: &UrlConfig) -> UrlDescriptor {
    let first = url_to_obj(url, config).unwrap();
    let rebuilt = obj_to_url(&first, config).unwrap();
    let second = url_to_obj(&rebuilt, config).unwrap();
    assert_eq!(first, second, "descriptor changed after rebuilding {url} as {rebuilt}");
    assert_eq!(rebuilt, url);
    first
}
