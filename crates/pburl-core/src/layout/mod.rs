//! URL layout recognition.
//!
//! `catalog` holds the fixed set of path shapes for managed and custom
//! domains together with their precedence; `classify` applies them to a URL
//! whose path and query `raw` slices out unmodified.

mod catalog;
mod classify;
mod raw;

pub use catalog::{first_match, is_version_tag, is_zone_slug, DomainMode, Shape, SHAPE_PRECEDENCE};
pub use classify::{classify, ClassifiedUrl, Layout};
pub use raw::{raw_parts, RawParts};
