//! HTTP request/response values and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `GrafanaClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; the only code that
//! touches the network is a `Transport` implementation handed to the client
//! at construction time. There is no ambient or global HTTP client.
//!
//! All fields use owned types so values can be moved across threads and
//! stored in test fixtures without lifetime concerns.

use std::fmt;

/// Boxed error returned by a `Transport`. Propagated to callers unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: the configured base URL joined with the endpoint path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data. The body has already been read
/// to completion by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// The status line as `"<code> <reason>"`, e.g. `404 Not Found`.
    ///
    /// Codes without a registered reason phrase render as the bare number.
    pub fn status_line(&self) -> String {
        let reason = http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason());
        match reason {
            Some(reason) => format!("{} {reason}", self.status),
            None => self.status.to_string(),
        }
    }
}

/// Executes an `HttpRequest` and returns the fully-read `HttpResponse`.
///
/// Non-2xx statuses are data, not errors: implementations must return them as
/// `Ok` so the client can interpret the status itself. `Err` is reserved for
/// failures to produce any response at all (DNS, connect, TLS, I/O).
///
/// Implementations must be safe to share between threads; connection reuse
/// is the transport's business.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, BoxError> + Send + Sync,
{
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn status_line_includes_reason_phrase() {
        assert_eq!(response(200).status_line(), "200 OK");
        assert_eq!(response(404).status_line(), "404 Not Found");
        assert_eq!(response(403).status_line(), "403 Forbidden");
        assert_eq!(response(409).status_line(), "409 Conflict");
    }

    #[test]
    fn status_line_without_known_reason_is_bare_code() {
        assert_eq!(response(599).status_line(), "599");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/api/orgs/".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), None);
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn closures_are_transports() {
        let transport = |req: HttpRequest| -> Result<HttpResponse, BoxError> {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: req.url,
            })
        };
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://example.test/api/orgs/".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let resp = transport.execute(req).unwrap();
        assert_eq!(resp.body, "http://example.test/api/orgs/");
    }
}
