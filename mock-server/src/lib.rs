use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const ORG_ID_HEADER: &str = "x-grafana-org-id";

/// Name of the organization every fresh server starts with.
pub const MAIN_ORG: &str = "Main Org.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Org {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateOrg {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrg {
    pub message: String,
    pub org_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub access: String,
    pub is_default: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub struct Store {
    next_org_id: i64,
    orgs: BTreeMap<i64, Org>,
    data_sources: Vec<DataSource>,
}

impl Store {
    /// One org and one Prometheus data source, like a fresh Grafana.
    fn seeded() -> Self {
        let main = Org {
            id: 1,
            name: MAIN_ORG.to_string(),
        };
        let prometheus = DataSource {
            id: 1,
            org_id: main.id,
            name: "Prometheus".to_string(),
            kind: "prometheus".to_string(),
            url: "http://prometheus:9090".to_string(),
            access: "proxy".to_string(),
            is_default: true,
        };
        Self {
            next_org_id: 2,
            orgs: BTreeMap::from([(main.id, main)]),
            data_sources: vec![prometheus],
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Message>)>;

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Message>) {
    (
        status,
        Json(Message {
            message: message.to_string(),
        }),
    )
}

fn org_not_found() -> (StatusCode, Json<Message>) {
    error(StatusCode::NOT_FOUND, "Organization not found")
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/api/orgs", post(create_org))
        .route("/api/orgs/", get(list_orgs))
        .route("/api/orgs/{id}", get(get_org).delete(delete_org))
        .route("/api/orgs/name/{name}", get(get_org_by_name))
        .route("/api/datasources", get(list_data_sources))
        .with_state(db)
        .layer(middleware::from_fn(require_auth))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Any `Authorization` header is accepted; its absence is a 401.
async fn require_auth(request: Request, next: Next) -> Result<Response, StatusCode> {
    if request.headers().contains_key(header::AUTHORIZATION) {
        Ok(next.run(request).await)
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn list_orgs(State(db): State<Db>) -> Json<Vec<Org>> {
    let store = db.read().await;
    Json(store.orgs.values().cloned().collect())
}

async fn get_org(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<Org> {
    let store = db.read().await;
    store.orgs.get(&id).cloned().map(Json).ok_or_else(org_not_found)
}

async fn get_org_by_name(State(db): State<Db>, Path(name): Path<String>) -> ApiResult<Org> {
    let store = db.read().await;
    store
        .orgs
        .values()
        .find(|org| org.name == name)
        .cloned()
        .map(Json)
        .ok_or_else(org_not_found)
}

async fn create_org(State(db): State<Db>, Json(input): Json<CreateOrg>) -> ApiResult<CreatedOrg> {
    let mut store = db.write().await;
    if store.orgs.values().any(|org| org.name == input.name) {
        return Err(error(StatusCode::CONFLICT, "Organization name taken"));
    }
    let id = store.next_org_id;
    store.next_org_id += 1;
    store.orgs.insert(
        id,
        Org {
            id,
            name: input.name,
        },
    );
    info!(org_id = id, "organization created");
    Ok(Json(CreatedOrg {
        message: "Organization created".to_string(),
        org_id: id,
    }))
}

async fn delete_org(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<Message> {
    let mut store = db.write().await;
    store.orgs.remove(&id).ok_or_else(org_not_found)?;
    store.data_sources.retain(|ds| ds.org_id != id);
    info!(org_id = id, "organization deleted");
    Ok(Json(Message {
        message: "Organization deleted".to_string(),
    }))
}

/// Scoped by `X-Grafana-Org-Id`; without the header the main org is used.
async fn list_data_sources(State(db): State<Db>, headers: HeaderMap) -> ApiResult<Vec<DataSource>> {
    let org_id = match headers.get(ORG_ID_HEADER) {
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Invalid org id"))?,
        None => 1,
    };
    let store = db.read().await;
    if !store.orgs.contains_key(&org_id) {
        return Err(org_not_found());
    }
    Ok(Json(
        store
            .data_sources
            .iter()
            .filter(|ds| ds.org_id == org_id)
            .cloned()
            .collect(),
    ))
}
