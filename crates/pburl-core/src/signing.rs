//! Time-limited URL signatures (`pbs` / `pbe` / `pbt` query params).

use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::layout::raw_parts;

type HmacSha256 = Hmac<Sha256>;

/// Bytes left as-is when encoding the signed path: alphanumerics plus `-._~:/?&=#`.
const ENCODE_URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'&')
    .remove(b'=')
    .remove(b'#');

const SIGNATURE_PARAM: &str = "pbs";
const EXPIRY_PARAM: &str = "pbe";
const ACCESS_KEY_PARAM: &str = "pbt";

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("url, accessKey, token & expirySeconds are required for generating signed URL")]
    MissingArgument,

    #[error("URL already has a signature")]
    AlreadySigned,

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Sign `url` so that it expires `expiry_seconds` from now.
pub fn sign_url(
    url: &str,
    expiry_seconds: u64,
    access_key: &str,
    token: &str,
) -> Result<String, SigningError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    sign_url_at(url, expiry_seconds, access_key, token, now)
}

/// Sign `url` with an explicit current time (seconds since the Unix epoch).
pub fn sign_url_at(
    url: &str,
    expiry_seconds: u64,
    access_key: &str,
    token: &str,
    now_unix_secs: u64,
) -> Result<String, SigningError> {
    if url.is_empty() || access_key.is_empty() || token.is_empty() || expiry_seconds == 0 {
        return Err(SigningError::MissingArgument);
    }

    let parsed = url::Url::parse(url)?;
    let raw = raw_parts(url);
    let original_query = raw.query.filter(|q| !q.is_empty());
    let already_signed = parsed
        .query_pairs()
        .any(|(key, _)| key == SIGNATURE_PARAM);
    if already_signed {
        return Err(SigningError::AlreadySigned);
    }

    let expiry = now_unix_secs.saturating_add(expiry_seconds);
    // The signature covers the path and query as written, not the normalized form.
    let signed_path = match original_query {
        Some(q) => format!("{}?{}", raw.path, q),
        None => raw.path.to_string(),
    };
    let signature = signature_for(&signed_path, expiry, token);
    tracing::debug!(path = %signed_path, expiry, "signed url");

    let mut query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(SIGNATURE_PARAM, &signature)
        .append_pair(EXPIRY_PARAM, &expiry.to_string())
        .append_pair(ACCESS_KEY_PARAM, access_key)
        .finish();
    if let Some(q) = original_query {
        query.push('&');
        query.push_str(q);
    }

    let authority = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    Ok(format!(
        "{}://{}{}?{}",
        parsed.scheme(),
        authority,
        parsed.path(),
        query
    ))
}

/// Lowercase hex HMAC-SHA256 over the encoded path (leading `/` removed) and expiry.
fn signature_for(path_and_query: &str, expiry: u64, token: &str) -> String {
    let relative = path_and_query.strip_prefix('/').unwrap_or(path_and_query);
    let message = format!("{}{}", encode_uri(relative), expiry);

    let mut mac = HmacSha256::new_from_slice(token.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Percent-encode everything outside [`ENCODE_URI_SET`] (uppercase hex).
fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_URI_SET).to_string()
}
