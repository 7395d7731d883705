//! Wire DTOs for the organization and data source endpoints.
//!
//! # Design
//! These mirror the JSON Grafana returns but are defined independently of
//! the mock-server crate; the integration tests catch schema drift. Unknown
//! fields in responses are ignored.

use serde::{Deserialize, Serialize};

/// An organization. A disconnected snapshot of server state: decoding a
/// response always yields a fresh value and nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Org {
    pub id: i64,
    pub name: String,
}

/// Body of a successful `POST /api/orgs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrg {
    #[serde(default)]
    pub org_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A data source belonging to an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub is_default: bool,
}
