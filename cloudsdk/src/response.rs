//! Responses "with HTTP info".

use reqwest::header::HeaderMap;

/// Headers that carry a server-side request id, by API family.
const REQUEST_ID_HEADERS: &[&str] = &["x-ms-request-id", "opc-request-id", "x-request-id"];

/// A decoded response body together with its status and headers.
///
/// Every operation `op` has an `op_with_http_info` sibling returning this
/// wrapper; `op` itself returns [`into_body`](Self::into_body).
#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub body: T,
}

impl<T> HttpResponse<T> {
    /// Discards status and headers.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HttpResponse<U> {
        HttpResponse {
            status: self.status,
            headers: self.headers,
            body: f(self.body),
        }
    }

    /// Returns a header value if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Server-assigned request id (`x-ms-request-id`, `opc-request-id`, ...).
    pub fn request_id(&self) -> Option<&str> {
        REQUEST_ID_HEADERS.iter().find_map(|name| self.header(name))
    }

    /// Entity tag, used by OCI for optimistic concurrency (`if-match`).
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Continuation token of a paginated OCI list (`opc-next-page`).
    pub fn next_page(&self) -> Option<&str> {
        self.header("opc-next-page")
    }
}
