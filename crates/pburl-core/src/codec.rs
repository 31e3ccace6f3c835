//! Top-level entry points: URL string <-> [`UrlDescriptor`].

use crate::config::UrlConfig;
use crate::error::{Result, UrlError};
use crate::layout::{self, DomainMode, Layout};
use crate::pattern;
use crate::query;
use crate::url_model::{UrlDescriptor, DEFAULT_BASE_URL, ORIGINAL_PATTERN, WORKER_SEGMENT};

/// Version written when a descriptor has none (or an unrecognized one).
const DEFAULT_BUILD_VERSION: &str = "v2";

/// Decompose a transformation URL into its descriptor.
pub fn url_to_obj(url: &str, config: &UrlConfig) -> Result<UrlDescriptor> {
    let mode = DomainMode::from_custom_flag(config.is_custom_domain);
    let classified = layout::classify(url, mode)?;

    let (zone, worker, worker_path, pattern, file_path) = match classified.layout {
        Layout::Worker { zone, worker_path } => {
            (zone, true, worker_path, String::new(), String::new())
        }
        Layout::Pattern {
            zone,
            pattern,
            file_path,
        } => (zone, false, String::new(), pattern, file_path),
    };

    let transformations = if pattern.is_empty() {
        Vec::new()
    } else {
        pattern::decode(&pattern, config)?
    };
    let options = query::parse_query(&classified.search)?;

    let base_url = match classified.port {
        Some(port) => format!("{}://{}:{}", classified.protocol, classified.host, port),
        None => format!("{}://{}", classified.protocol, classified.host),
    };

    Ok(UrlDescriptor {
        protocol: classified.protocol,
        host: classified.host,
        search: classified.search,
        base_url,
        version: classified.version,
        is_custom_domain: config.is_custom_domain,
        cloud_name: classified.cloud_name,
        zone,
        worker,
        worker_path,
        file_path,
        pattern,
        transformations,
        options,
    })
}

/// Assemble a transformation URL from a descriptor.
///
/// The descriptor is treated as custom-domain if either it or `config` says so.
pub fn obj_to_url(obj: &UrlDescriptor, config: &UrlConfig) -> Result<String> {
    let is_custom_domain = obj.is_custom_domain || config.is_custom_domain;

    let base_url = if obj.base_url.is_empty() {
        DEFAULT_BASE_URL
    } else {
        obj.base_url.trim_end_matches('/')
    };

    if !is_custom_domain && obj.cloud_name.is_empty() {
        return Err(UrlError::illegal_argument("key cloudName should be defined"));
    }
    if is_custom_domain && !obj.cloud_name.is_empty() {
        return Err(UrlError::illegal_argument(
            "key cloudName is not valid for custom domains",
        ));
    }
    if !obj.worker && obj.file_path.is_empty() {
        return Err(UrlError::illegal_argument("key filePath should be defined"));
    }
    if obj.worker && obj.worker_path.is_empty() {
        return Err(UrlError::illegal_argument("key workerPath should be defined"));
    }

    let pattern = if obj.worker {
        WORKER_SEGMENT.to_string()
    } else {
        pattern::serialize_pattern(&obj.transformations, config)?
            .unwrap_or_else(|| ORIGINAL_PATTERN.to_string())
    };

    let version = if layout::is_version_tag(&obj.version) {
        obj.version.as_str()
    } else {
        tracing::debug!(version = %obj.version, "version normalized to {DEFAULT_BUILD_VERSION}");
        DEFAULT_BUILD_VERSION
    };

    let zone = if layout::is_zone_slug(&obj.zone) {
        obj.zone.as_str()
    } else {
        if !obj.zone.is_empty() {
            tracing::debug!(zone = %obj.zone, "zone is not a 6-character slug; dropped");
        }
        ""
    };

    let cloud_name = if is_custom_domain {
        ""
    } else {
        obj.cloud_name.as_str()
    };

    let tail = if obj.worker {
        obj.worker_path.as_str()
    } else {
        obj.file_path.as_str()
    };

    let mut url = [base_url, version, cloud_name, zone, pattern.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .chain(std::iter::once(tail))
        .collect::<Vec<_>>()
        .join("/");

    url.push_str(&query::serialize_query(&obj.options)?);
    Ok(url)
}
