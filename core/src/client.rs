//! Shared client handle: request construction and execution.
//!
//! # Design
//! `GrafanaClient` holds a `ClientConfig` and an injected `Transport` and
//! carries no mutable state between calls. Every endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the convenience methods simply chain
//! build → `execute` → parse. Build and parse methods need no transport, so
//! `GrafanaClient<()>` is a pure request builder / response parser.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Blocking client for the Grafana HTTP API.
#[derive(Debug, Clone)]
pub struct GrafanaClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> GrafanaClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a request for `path` against the configured base URL.
    ///
    /// Always sets `Accept`; sets `Content-Type` when a body is present and
    /// `Authorization` when credentials are configured.
    pub fn new_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(auth) = self.config.credentials().header_value() {
            headers.push(("authorization".to_string(), auth));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body,
        }
    }
}

#[cfg(feature = "ureq")]
impl GrafanaClient<crate::transport::UreqTransport> {
    /// Client backed by a fresh blocking `ureq` agent.
    pub fn with_ureq(config: ClientConfig) -> Self {
        Self::new(config, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> GrafanaClient<T> {
    /// Run a request through the transport. Failures to obtain a response
    /// surface as `ApiError::Transport`; any status is returned as data.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// Only 200 counts as success. Everything else becomes `UnexpectedStatus`
/// carrying the status line.
pub(crate) fn check_status(response: &HttpResponse) -> Result<()> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        message: response.status_line(),
    })
}
