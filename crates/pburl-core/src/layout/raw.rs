//! Path and query exactly as the caller wrote them.
//!
//! `url::Url` normalizes its path (percent-encoding, dot-segment removal),
//! which would alter operation params and file paths. Scheme, host and port
//! still come from `url::Url`; the path and query are sliced from the input.

/// Raw path and query slices of a URL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParts<'a> {
    /// Starts with `/` unless the URL has no path at all.
    pub path: &'a str,
    /// Text between `?` and `#` (or the end), without the `?`.
    pub query: Option<&'a str>,
}

/// Split `url` into its raw path and query. The fragment is discarded.
pub fn raw_parts(url: &str) -> RawParts<'_> {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority_end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let rest = &after_scheme[authority_end..];
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);

    match rest.split_once('?') {
        Some((path, query)) => RawParts {
            path,
            query: Some(query),
        },
        None => RawParts {
            path: rest,
            query: None,
        },
    }
}
