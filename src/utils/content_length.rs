//! Content length extraction utilities.
//!
//! The length is only used to size the byte progress bar of a download, so
//! a missing or malformed header simply yields `None`.

use reqwest::header::{AsHeaderName, HeaderMap, CONTENT_LENGTH};

/// Expected body size announced by the `Content-Length` header.
///
/// # Example
///
/// ```rust
/// use academy_dl::utils::expected_length;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(expected_length(&headers), Some(2048));
/// ```
pub fn expected_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// Header value as an owned string, `None` when absent.
///
/// Servers put raw UTF-8 into `Content-Disposition` filenames, so bytes
/// outside visible ASCII are decoded lossily instead of being rejected.
pub fn header_string(headers: &HeaderMap, name: impl AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
