//! Query option codec: `dpr` and `f_auto`.
//!
//! Only these two keys are recognized; every other query parameter is left
//! alone (it survives on [`crate::UrlDescriptor::search`]).

use crate::error::{Result, UrlError, MSG_INVALID_DPR, MSG_INVALID_F_AUTO};
use crate::url_model::{Dpr, QueryOptions};

const DPR_MIN: f64 = 0.1;
const DPR_MAX: f64 = 5.0;

const TRUE_VALUES: [&str; 3] = ["true", "1", "yes"];
const FALSE_VALUES: [&str; 3] = ["false", "0", "no"];

/// Parse a `dpr` value: `auto` verbatim, otherwise a number in [0.1, 5.0].
pub fn parse_dpr(raw: &str) -> Result<Dpr> {
    if raw == "auto" {
        return Ok(Dpr::Auto);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| UrlError::illegal_query(MSG_INVALID_DPR))?;
    validate_dpr_ratio(value)
}

pub(crate) fn validate_dpr_ratio(value: f64) -> Result<Dpr> {
    // NaN fails `contains`, so it is rejected here too.
    if (DPR_MIN..=DPR_MAX).contains(&value) {
        Ok(Dpr::Ratio(value))
    } else {
        Err(UrlError::illegal_query(MSG_INVALID_DPR))
    }
}

/// Parse an `f_auto` value, case-insensitively.
pub fn parse_f_auto(raw: &str) -> Result<bool> {
    let lower = raw.to_ascii_lowercase();
    if TRUE_VALUES.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(UrlError::illegal_query(MSG_INVALID_F_AUTO))
    }
}

/// Scan a raw query string (with or without leading `?`) for recognized options.
pub fn parse_query(search: &str) -> Result<QueryOptions> {
    let mut options = QueryOptions::default();
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        return Ok(options);
    }

    for pair in search.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "dpr" => options.dpr = Some(parse_dpr(value)?),
            "f_auto" => options.f_auto = Some(parse_f_auto(value)?),
            _ => {}
        }
    }

    Ok(options)
}

/// Render options as `?dpr=..&f_auto=..`, or an empty string when none are set.
///
/// A caller-built `Dpr::Ratio` is range-checked again here.
pub fn serialize_query(options: &QueryOptions) -> Result<String> {
    let mut parts = Vec::with_capacity(2);
    if let Some(dpr) = options.dpr {
        if let Dpr::Ratio(v) = dpr {
            validate_dpr_ratio(v)?;
        }
        parts.push(format!("dpr={}", dpr));
    }
    if let Some(f_auto) = options.f_auto {
        parts.push(format!("f_auto={}", f_auto));
    }

    if parts.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", parts.join("&")))
    }
}
