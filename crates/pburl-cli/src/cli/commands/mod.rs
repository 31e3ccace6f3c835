//! CLI command handlers, one per file.

pub mod build;
pub mod parse;
mod sign;

pub use build::run_build;
pub use parse::run_parse;
pub use sign::run_sign;
