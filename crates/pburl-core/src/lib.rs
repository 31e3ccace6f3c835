//! Codec between Pixelbin transformation URLs and a structured [`UrlDescriptor`].

pub mod config;
pub mod error;
pub mod logging;

pub mod codec;
pub mod layout;
pub mod pattern;
pub mod query;
pub mod signing;
pub mod url_model;

pub use codec::{obj_to_url, url_to_obj};
pub use config::UrlConfig;
pub use error::{PatternError, UrlError};
pub use signing::{sign_url, sign_url_at, SigningError};
pub use url_model::{Dpr, QueryOptions, Transformation, TransformationParam, UrlDescriptor};
