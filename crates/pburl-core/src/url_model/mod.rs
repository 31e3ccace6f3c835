//! Structured form of a transformation URL.
//!
//! A [`UrlDescriptor`] is either produced by [`crate::url_to_obj`] or built by
//! a caller for [`crate::obj_to_url`]. It is plain value data.

mod options;
mod transformation;

pub use options::{Dpr, QueryOptions};
pub use transformation::{Transformation, TransformationParam, PRESET_PLUGIN};

use serde::{Deserialize, Serialize};

/// Base URL used when a descriptor to serialize does not name one.
pub const DEFAULT_BASE_URL: &str = "https://cdn.pixelbin.io";

/// Pattern text standing for "no transformations".
pub const ORIGINAL_PATTERN: &str = "original";

/// Path literal marking a worker URL.
pub const WORKER_SEGMENT: &str = "wrkr";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlDescriptor {
    pub protocol: String,
    pub host: String,
    /// Raw query string (without `?`) as it appeared in the parsed URL.
    pub search: String,
    pub base_url: String,
    /// `v1` or `v2`.
    pub version: String,
    pub is_custom_domain: bool,
    /// Tenant id; empty on custom domains.
    pub cloud_name: String,
    /// Empty, or an exactly 6-character slug.
    pub zone: String,
    pub worker: bool,
    pub worker_path: String,
    pub file_path: String,
    pub pattern: String,
    pub transformations: Vec<Transformation>,
    pub options: QueryOptions,
}

impl UrlDescriptor {
    /// Serialized token text of each transformation, in order.
    fn transformation_tokens(&self) -> Vec<String> {
        self.transformations.iter().map(ToString::to_string).collect()
    }
}

impl PartialEq for UrlDescriptor {
    /// Scalar fields compare directly; transformations and options compare by
    /// their serialized text, so order is significant.
    fn eq(&self, other: &Self) -> bool {
        self.protocol == other.protocol
            && self.host == other.host
            && self.search == other.search
            && self.base_url == other.base_url
            && self.version == other.version
            && self.is_custom_domain == other.is_custom_domain
            && self.cloud_name == other.cloud_name
            && self.zone == other.zone
            && self.worker == other.worker
            && self.worker_path == other.worker_path
            && self.file_path == other.file_path
            && self.pattern == other.pattern
            && self.transformation_tokens() == other.transformation_tokens()
            && self.options.to_string() == other.options.to_string()
    }
}
