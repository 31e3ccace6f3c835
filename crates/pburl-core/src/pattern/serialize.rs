//! Transformation list to pattern text.

use crate::config::UrlConfig;
use crate::error::{Result, UrlError};
use crate::url_model::Transformation;

/// Join transformations into pattern text.
///
/// Transformations with an empty operation name are skipped. Returns `None`
/// when nothing is left, which callers treat as `original`.
pub fn serialize_pattern(
    transformations: &[Transformation],
    config: &UrlConfig,
) -> Result<Option<String>> {
    let mut tokens = Vec::with_capacity(transformations.len());
    for t in transformations.iter().filter(|t| !t.operation.is_empty()) {
        validate_params(t)?;
        tokens.push(t.render(&config.parameter_separator));
    }

    if tokens.is_empty() {
        Ok(None)
    } else {
        Ok(Some(tokens.join(&config.operation_separator)))
    }
}

fn validate_params(t: &Transformation) -> Result<()> {
    for param in &t.params {
        if param.key.is_empty() {
            return Err(UrlError::illegal_argument(format!(
                "key not specified in '{}'",
                t.operation
            )));
        }
        if param.value.is_empty() {
            return Err(UrlError::illegal_argument(format!(
                "value not specified for key '{}' in '{}'",
                param.key, t.operation
            )));
        }
    }
    Ok(())
}
