//! Data source lookup scoped to an organization.
//!
//! Grafana resolves `/api/datasources` against the org named in the
//! `X-Grafana-Org-Id` header, so listing another org's data sources is the
//! plain list endpoint plus that header.

use crate::client::{check_status, GrafanaClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{DataSource, Org};

pub const ORG_ID_HEADER: &str = "X-Grafana-Org-Id";

impl<T> GrafanaClient<T> {
    pub fn build_data_sources_by_org_id(&self, org_id: i64) -> HttpRequest {
        let mut req = self.new_request(HttpMethod::Get, "/api/datasources", None);
        req.headers.push((ORG_ID_HEADER.to_string(), org_id.to_string()));
        req
    }

    /// A `null` body decodes to an empty list.
    pub fn parse_data_sources(&self, response: HttpResponse) -> Result<Vec<DataSource>> {
        check_status(&response)?;
        let sources: Option<Vec<DataSource>> = serde_json::from_str(&response.body)?;
        Ok(sources.unwrap_or_default())
    }
}

impl<T: Transport> GrafanaClient<T> {
    pub fn data_sources_by_org_id(&self, org_id: i64) -> Result<Vec<DataSource>> {
        let response = self.execute(self.build_data_sources_by_org_id(org_id))?;
        self.parse_data_sources(response)
    }
}

impl Org {
    /// Data sources belonging to this organization.
    pub fn data_sources<T: Transport>(&self, client: &GrafanaClient<T>) -> Result<Vec<DataSource>> {
        client.data_sources_by_org_id(self.id)
    }
}
