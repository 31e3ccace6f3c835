//! Pattern text to transformation list.

use crate::config::UrlConfig;
use crate::error::PatternError;
use crate::url_model::{Transformation, TransformationParam, ORIGINAL_PATTERN, PRESET_PLUGIN};

/// Colon-form prefix of a preset reference (`p:<name>`).
const PRESET_PREFIX: &str = "p:";
const PARAMETER_LINK: char = ':';

/// Parse a `~`-joined pattern into transformations, in order.
///
/// `original` yields an empty list; empty tokens between separators are skipped.
pub fn parse_pattern(
    pattern: &str,
    config: &UrlConfig,
) -> Result<Vec<Transformation>, PatternError> {
    if pattern == ORIGINAL_PATTERN {
        return Ok(Vec::new());
    }

    pattern
        .split(config.operation_separator.as_str())
        .filter(|token| !token.is_empty())
        .map(|token| parse_token(token, &config.parameter_separator))
        .collect()
}

/// Parse one token such as `t.resize(h:200,w:100)`, `erase.bg()`, `p:preset1`.
pub fn parse_token(token: &str, parameter_separator: &str) -> Result<Transformation, PatternError> {
    let open = token.find('(');
    if let Some(close) = token.find(')') {
        if open.map_or(true, |o| close < o) {
            return Err(PatternError::UnbalancedParentheses {
                token: token.to_string(),
            });
        }
    }

    let head = open.map_or(token, |o| &token[..o]);
    let split = if token.starts_with(PRESET_PREFIX) {
        head.split_once(':')
    } else {
        head.split_once('.')
    };
    let (plugin, operation) = split.ok_or_else(|| PatternError::MissingSeparator {
        token: token.to_string(),
    })?;

    if plugin.is_empty() || operation.is_empty() {
        return Err(PatternError::EmptySegment {
            token: token.to_string(),
        });
    }

    let params = match open {
        Some(o) => parse_params(&token[o + 1..], parameter_separator),
        // A bare preset name is the only token allowed without parentheses.
        None if plugin == PRESET_PLUGIN => Vec::new(),
        None => {
            return Err(PatternError::MissingParentheses {
                token: token.to_string(),
            })
        }
    };

    Ok(Transformation {
        plugin: plugin.to_string(),
        operation: operation.to_string(),
        params,
    })
}

/// Params from the text after `(`. A missing closing `)` is tolerated.
fn parse_params(inner: &str, parameter_separator: &str) -> Vec<TransformationParam> {
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    let inner = inner.strip_prefix('-').unwrap_or(inner);
    if inner.is_empty() {
        return Vec::new();
    }

    inner
        .split(parameter_separator)
        .filter_map(|item| item.split_once(PARAMETER_LINK))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| TransformationParam::new(key, value))
        .collect()
}
