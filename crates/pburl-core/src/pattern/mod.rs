//! Transformation codec: pattern text <-> ordered transformation list.

mod parse;
mod serialize;

pub use parse::{parse_pattern, parse_token};
pub use serialize::serialize_pattern;

use crate::config::UrlConfig;
use crate::error::{Result, UrlError};
use crate::url_model::Transformation;

/// Parse `pattern`, collapsing any structural failure into the generic
/// "Error Processing url" error. The specific cause stays reachable through
/// [`UrlError::pattern_cause`].
pub fn decode(pattern: &str, config: &UrlConfig) -> Result<Vec<Transformation>> {
    parse_pattern(pattern, config).map_err(|cause| {
        tracing::debug!(%cause, pattern, "transformation pattern rejected");
        UrlError::from(cause)
    })
}
