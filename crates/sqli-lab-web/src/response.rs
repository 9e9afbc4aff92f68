//! HTTP response type.

use crate::error::Result;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    fn with_body(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body,
        }
    }

    /// Creates a response with HTML content.
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_body(200, "text/html; charset=utf-8", body.into().into_bytes())
    }

    /// Creates a response with JSON content.
    pub fn json<T: serde::Serialize>(data: &T) -> Result<Self> {
        Ok(Self::with_body(200, "application/json", serde_json::to_vec(data)?))
    }

    /// Creates a response with plain text content.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_body(200, "text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request(reason: &str) -> Self {
        Self::with_body(400, "text/plain; charset=utf-8", reason.as_bytes().to_vec())
    }

    /// Creates a 404 Not Found response.
    #[must_use]
    pub fn not_found() -> Self {
        Self::with_body(404, "text/plain; charset=utf-8", b"Not Found".to_vec())
    }

    /// Creates a 405 Method Not Allowed response.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        let mut response =
            Self::with_body(405, "text/plain; charset=utf-8", b"Method Not Allowed".to_vec());
        response
            .headers
            .push(("Allow".to_string(), "GET, HEAD".to_string()));
        response
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::with_body(
            500,
            "text/plain; charset=utf-8",
            b"Internal Server Error".to_vec(),
        )
    }

    /// Gets a header value (case-insensitive).
    #[must_use]
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the body as text.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
