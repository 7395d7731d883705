use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, CreatedOrg, DataSource, Message, Org, MAIN_ORG};
use tower::ServiceExt;

const AUTH: &str = "Basic YWRtaW46YWRtaW4=";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, AUTH)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, AUTH)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_authorization_returns_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/orgs/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- list ---

#[tokio::test]
async fn list_orgs_starts_with_main_org() {
    let resp = app().oneshot(request("GET", "/api/orgs/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let orgs: Vec<Org> = body_json(resp).await;
    assert_eq!(orgs, vec![Org { id: 1, name: MAIN_ORG.to_string() }]);
}

// --- create ---

#[tokio::test]
async fn create_org_returns_200_with_org_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/orgs", r#"{"name":"Ops"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let created: CreatedOrg = body_json(resp).await;
    assert_eq!(created.org_id, 2);
    assert_eq!(created.message, "Organization created");
}

#[tokio::test]
async fn create_org_duplicate_name_returns_409() {
    let resp = app()
        .oneshot(json_request("POST", "/api/orgs", r#"{"name":"Main Org."}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let msg: Message = body_json(resp).await;
    assert_eq!(msg.message, "Organization name taken");
}

#[tokio::test]
async fn create_org_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/orgs", r#"{"title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_org_not_found() {
    let resp = app().oneshot(request("GET", "/api/orgs/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let msg: Message = body_json(resp).await;
    assert_eq!(msg.message, "Organization not found");
}

#[tokio::test]
async fn get_org_bad_id_returns_400() {
    let resp = app().oneshot(request("GET", "/api/orgs/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_org_by_escaped_name() {
    let resp = app()
        .oneshot(request("GET", "/api/orgs/name/Main%20Org."))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let org: Org = body_json(resp).await;
    assert_eq!(org.id, 1);
}

// --- delete ---

#[tokio::test]
async fn delete_org_not_found() {
    let resp = app().oneshot(request("DELETE", "/api/orgs/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- data sources ---

#[tokio::test]
async fn data_sources_default_to_main_org() {
    let resp = app().oneshot(request("GET", "/api/datasources")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let sources: Vec<DataSource> = body_json(resp).await;
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].kind, "prometheus");
}

#[tokio::test]
async fn data_sources_unknown_org_returns_404() {
    let req = Request::builder()
        .uri("/api/datasources")
        .header(http::header::AUTHORIZATION, AUTH)
        .header("X-Grafana-Org-Id", "42")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn org_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/orgs", r#"{"name":"Ops"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: CreatedOrg = body_json(resp).await;
    let id = created.org_id;

    // list — main org plus the new one
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("GET", "/api/orgs/"))
        .await
        .unwrap();
    let orgs: Vec<Org> = body_json(resp).await;
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[1], Org { id, name: "Ops".to_string() });

    // get by id and by name agree
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("GET", &format!("/api/orgs/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let by_id: Org = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("GET", "/api/orgs/name/Ops"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let by_name: Org = body_json(resp).await;
    assert_eq!(by_id, by_name);

    // new org has no data sources
    let req = Request::builder()
        .uri("/api/datasources")
        .header(http::header::AUTHORIZATION, AUTH)
        .header("X-Grafana-Org-Id", id.to_string())
        .body(String::new())
        .unwrap();
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let sources: Vec<DataSource> = body_json(resp).await;
    assert!(sources.is_empty());

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("DELETE", &format!("/api/orgs/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let msg: Message = body_json(resp).await;
    assert_eq!(msg.message, "Organization deleted");

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("GET", &format!("/api/orgs/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ids are not reused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/orgs", r#"{"name":"Ops"}"#))
        .await
        .unwrap();
    let recreated: CreatedOrg = body_json(resp).await;
    assert_eq!(recreated.org_id, id + 1);
}
