//! Layout classifier: split a URL into version, cloud name, zone and either a
//! worker path or a pattern plus file path.

use super::catalog::{self, DomainMode, Shape};
use super::raw::raw_parts;
use crate::error::{Result, UrlError};
use crate::url_model::WORKER_SEGMENT;

/// Version assumed for managed-domain URLs without a version tag.
const DEFAULT_PARSE_VERSION: &str = "v1";
/// Managed cloud names shorter than this are rejected before shape matching.
const MIN_CLOUD_NAME_LEN: usize = 3;

/// What the matched shape says the path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Worker {
        zone: String,
        worker_path: String,
    },
    Pattern {
        zone: String,
        pattern: String,
        file_path: String,
    },
}

/// Raw fields extracted from a URL before the pattern and query are decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedUrl {
    pub protocol: String,
    pub host: String,
    /// Explicit non-default port, if the URL carried one.
    pub port: Option<u16>,
    /// Query string without the leading `?`.
    pub search: String,
    pub version: String,
    /// Empty for custom domains.
    pub cloud_name: String,
    pub shape: Shape,
    pub layout: Layout,
}

/// Classify `url` under the given domain mode.
///
/// Path segments and the query are taken verbatim from `url`.
pub fn classify(url: &str, mode: DomainMode) -> Result<ClassifiedUrl> {
    let parsed = url::Url::parse(url).map_err(|e| {
        tracing::debug!("url parse failed for {url}: {e}");
        UrlError::invalid_layout()
    })?;
    let raw = raw_parts(url);

    let mut parts: Vec<&str> = raw.path.split('/').collect();

    let has_version = parts.get(1).is_some_and(|seg| catalog::is_version_tag(seg));
    let version = if has_version {
        parts.remove(1).to_string()
    } else if mode == DomainMode::Custom {
        tracing::debug!("custom-domain url without version tag: {url}");
        return Err(UrlError::invalid_layout());
    } else {
        DEFAULT_PARSE_VERSION.to_string()
    };

    if mode == DomainMode::Managed {
        let cloud_ok = parts
            .get(1)
            .is_some_and(|seg| seg.len() >= MIN_CLOUD_NAME_LEN);
        if !cloud_ok {
            return Err(UrlError::invalid_layout());
        }
    }

    let path = parts.join("/");
    let shape = catalog::first_match(mode, &path).ok_or_else(|| {
        tracing::debug!("no layout shape matched path {path}");
        UrlError::invalid_layout()
    })?;
    tracing::trace!(?shape, ?mode, "layout shape matched");

    // parts[0] is the empty string before the leading slash.
    let segments = &parts[1..];
    let (cloud_name, rest) = match mode {
        DomainMode::Managed => (segments[0].to_string(), &segments[1..]),
        DomainMode::Custom => (String::new(), segments),
    };

    Ok(ClassifiedUrl {
        protocol: parsed.scheme().to_string(),
        host: parsed.host_str().unwrap_or_default().to_string(),
        port: parsed.port(),
        search: raw.query.unwrap_or_default().to_string(),
        version,
        cloud_name,
        shape,
        layout: extract(shape, rest),
    })
}

/// Pull the shape's fields out of the segments following the cloud name.
///
/// The shape matcher has already guaranteed the segment count each arm indexes.
fn extract(shape: Shape, rest: &[&str]) -> Layout {
    match shape {
        Shape::ZoneWorker => {
            debug_assert_eq!(rest[1], WORKER_SEGMENT);
            Layout::Worker {
                zone: rest[0].to_string(),
                worker_path: rest[2..].join("/"),
            }
        }
        Shape::Worker => Layout::Worker {
            zone: String::new(),
            worker_path: rest[1..].join("/"),
        },
        Shape::ZonePattern => Layout::Pattern {
            zone: rest[0].to_string(),
            pattern: rest[1].to_string(),
            file_path: rest[2..].join("/"),
        },
        Shape::Pattern => Layout::Pattern {
            zone: String::new(),
            pattern: rest[0].to_string(),
            file_path: rest[1..].join("/"),
        },
    }
}
