//! Blocking client for the Grafana organization API.
//!
//! # Overview
//! Translates organization operations (get by id, get by name, list,
//! create, delete) into HTTP requests against `/api/orgs` and decodes the
//! JSON responses into typed values.
//!
//! # Design
//! - `GrafanaClient` owns a `ClientConfig` and an injected `Transport`;
//!   there is no global HTTP client and no state between calls.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   wire contract is testable without a network.
//! - 200 is the only success status. Other statuses become
//!   `ApiError::UnexpectedStatus`, which displays as the status line.
//! - With the default `ureq` feature, `UreqTransport` performs real blocking
//!   HTTP.
//!
//! ```no_run
//! use grafana_client::{ClientConfig, GrafanaClient};
//!
//! # fn main() -> grafana_client::Result<()> {
//! let client = GrafanaClient::with_ureq(ClientConfig::from_env()?);
//! for org in client.list_orgs()? {
//!     println!("{} {}", org.id, org.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod datasources;
pub mod error;
pub mod http;
pub mod orgs;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::GrafanaClient;
pub use config::{ClientConfig, Credentials};
pub use error::{ApiError, Result};
pub use http::{BoxError, HttpMethod, HttpRequest, HttpResponse, Transport};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{CreatedOrg, DataSource, Org};
