//! Blocking `Transport` backed by a `ureq` agent.

use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, RequestBuilder};

use crate::http::{BoxError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Upper bound on a response body. Well above ureq's 10 MB default so large
/// org or data source listings are not cut off.
const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

/// Executes requests on a shared `ureq::Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data and the client interprets status itself.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(builder: RequestBuilder<WithBody>, body: Option<&str>) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

fn call(builder: RequestBuilder<WithoutBody>) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    builder.call()
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let headers = &request.headers;
        let mut response = match request.method {
            HttpMethod::Get => call(with_headers(self.agent.get(&request.url), headers)),
            HttpMethod::Delete => call(with_headers(self.agent.delete(&request.url), headers)),
            HttpMethod::Post => send_body(
                with_headers(self.agent.post(&request.url), headers),
                request.body.as_deref(),
            ),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // Bodies are read as bytes; invalid UTF-8 is replaced rather than
        // rejected so the parse step decides what an unreadable body means.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
