//! Organization endpoints under `/api/orgs`.
//!
//! | Operation          | Request                     | Success body        |
//! |--------------------|-----------------------------|---------------------|
//! | `get_org`          | `GET /api/orgs/{id}`        | `{id, name}`        |
//! | `get_org_by_name`  | `GET /api/orgs/name/{name}` | `{id, name}`        |
//! | `list_orgs`        | `GET /api/orgs/`            | `[{id, name}, ...]` |
//! | `create_org`       | `POST /api/orgs`            | `{orgId}`           |
//! | `delete_org`       | `DELETE /api/orgs/{id}`     | ignored             |
//!
//! Every operation treats 200 as the only success status.

use tracing::warn;

use crate::client::{check_status, GrafanaClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{CreatedOrg, Org};

const ORGS_PATH: &str = "/api/orgs";

impl<T> GrafanaClient<T> {
    pub fn build_get_org(&self, id: i64) -> HttpRequest {
        self.new_request(HttpMethod::Get, &format!("{ORGS_PATH}/{id}"), None)
    }

    /// The name is percent-encoded so names containing `/`, `?`, `#` or
    /// spaces address a single path segment.
    pub fn build_get_org_by_name(&self, name: &str) -> HttpRequest {
        let path = format!("{ORGS_PATH}/name/{}", urlencoding::encode(name));
        self.new_request(HttpMethod::Get, &path, None)
    }

    pub fn build_list_orgs(&self) -> HttpRequest {
        self.new_request(HttpMethod::Get, &format!("{ORGS_PATH}/"), None)
    }

    pub fn build_create_org(&self, name: &str) -> HttpRequest {
        let body = serde_json::json!({ "name": name }).to_string();
        self.new_request(HttpMethod::Post, ORGS_PATH, Some(body))
    }

    pub fn build_delete_org(&self, id: i64) -> HttpRequest {
        self.new_request(HttpMethod::Delete, &format!("{ORGS_PATH}/{id}"), None)
    }

    pub fn parse_get_org(&self, response: HttpResponse) -> Result<Org> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub fn parse_get_org_by_name(&self, response: HttpResponse) -> Result<Org> {
        self.parse_get_org(response)
    }

    /// A `null` body decodes to an empty list.
    pub fn parse_list_orgs(&self, response: HttpResponse) -> Result<Vec<Org>> {
        check_status(&response)?;
        let orgs: Option<Vec<Org>> = serde_json::from_str(&response.body)?;
        Ok(orgs.unwrap_or_default())
    }

    /// Returns the new organization's id.
    ///
    /// The id is best effort: a 200 response whose body does not decode
    /// yields `Ok(0)` instead of an error, and a missing `orgId` is also 0.
    /// Existing callers rely on create never failing after the server has
    /// accepted it, so the decode error is logged and dropped.
    pub fn parse_create_org(&self, response: HttpResponse) -> Result<i64> {
        check_status(&response)?;
        match serde_json::from_str::<CreatedOrg>(&response.body) {
            Ok(created) => Ok(created.org_id),
            Err(err) => {
                warn!(error = %err, "discarding undecodable create-org response");
                Ok(0)
            }
        }
    }

    pub fn parse_delete_org(&self, response: HttpResponse) -> Result<()> {
        check_status(&response)
    }
}

impl<T: Transport> GrafanaClient<T> {
    pub fn get_org(&self, id: i64) -> Result<Org> {
        let response = self.execute(self.build_get_org(id))?;
        self.parse_get_org(response)
    }

    pub fn get_org_by_name(&self, name: &str) -> Result<Org> {
        let response = self.execute(self.build_get_org_by_name(name))?;
        self.parse_get_org_by_name(response)
    }

    pub fn list_orgs(&self) -> Result<Vec<Org>> {
        let response = self.execute(self.build_list_orgs())?;
        self.parse_list_orgs(response)
    }

    pub fn create_org(&self, name: &str) -> Result<i64> {
        let response = self.execute(self.build_create_org(name))?;
        self.parse_create_org(response)
    }

    pub fn delete_org(&self, id: i64) -> Result<()> {
        let response = self.execute(self.build_delete_org(id))?;
        self.parse_delete_org(response)
    }
}
