//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** response returned by the
//! fetch pipeline. It contains the final URL (after any redirects the
//! transport followed), status code + reason, response headers, and the
//! raw body bytes.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. For text responses, convert
//!   with [`Response::body_text`] or `String::from_utf8_lossy`.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive**
//!   for header names.
//! - `status_text` is derived from the status code's canonical reason
//!   phrase and may be `"Unknown"` for non-standard codes.

use http::HeaderMap;
use std::borrow::Cow;

/// Simple structure for HTTP responses.
///
/// All fields reflect the received response as-is; no additional parsing
/// or transformation is performed by this type. Locally answered schemes
/// (`about:`) produce a synthetic response with an empty header map.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, lossily.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
