use std::sync::Arc;

use fulfilment_api::app::services::AppServices;
use fulfilment_infra::StaticLocationDirectory;
use fulfilment_warehouses::Location;
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(StaticLocationDirectory::new(vec![
            Location::new("ZWOLLE-001", 2, 100),
            Location::new("TILBURG-001", 1, 40),
            Location::new("L", 5, 100),
        ]))
        .await
    }

    async fn spawn_with(locations: StaticLocationDirectory) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = fulfilment_api::app::build_app(Arc::new(AppServices::in_memory(locations)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, srv: &TestServer, body: Value) -> reqwest::Response {
    client.post(srv.url("/warehouse")).json(&body).send().await.unwrap()
}

async fn error_code(res: reqwest::Response) -> String {
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string(), "error body without message: {body}");
    body["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public_and_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_then_get_and_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "ZWOLLE-001", "capacity": 30, "stock": 10 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["businessUnitCode"], "MWH.001");
    assert_eq!(created["location"], "ZWOLLE-001");
    assert_eq!(created["capacity"], 30);
    assert_eq!(created["stock"], 10);
    assert!(created["createdAt"].is_string());
    assert!(created["archivedAt"].is_null());
    assert!(created.get("id").is_none());

    let res = client.get(srv.url("/warehouse/mwh.001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["businessUnitCode"], "MWH.001");

    let res = client.get(srv.url("/warehouse")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: Vec<Value> = res.json().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn create_rejections_map_to_statuses() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // No body at all.
    let res = client.post(srv.url("/warehouse")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, "invalid_request");

    // Malformed JSON.
    let res = client
        .post(srv.url("/warehouse"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Missing field.
    let res = create(&client, &srv, json!({ "location": "ZWOLLE-001", "capacity": 10, "stock": 0 })).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Unknown location.
    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "NOWHERE-001", "capacity": 10, "stock": 0 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_code(res).await, "unprocessable_entity");

    // Stock above capacity.
    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "ZWOLLE-001", "capacity": 5, "stock": 6 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Duplicate active code, case-insensitively.
    let ok = json!({ "businessUnitCode": "MWH.001", "location": "ZWOLLE-001", "capacity": 10, "stock": 0 });
    assert_eq!(create(&client, &srv, ok).await.status(), StatusCode::CREATED);
    let dup = json!({ "businessUnitCode": "mwh.001", "location": "L", "capacity": 10, "stock": 0 });
    let res = create(&client, &srv, dup).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(res).await, "conflict");
}

#[tokio::test]
async fn full_location_rejects_third_warehouse() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for code in ["MWH.001", "MWH.002"] {
        let res = create(
            &client,
            &srv,
            json!({ "businessUnitCode": code, "location": "ZWOLLE-001", "capacity": 10, "stock": 0 }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.003", "location": "ZWOLLE-001", "capacity": 10, "stock": 0 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn archive_unknown_twice_and_after_archival() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.delete(srv.url("/warehouse/MWH.404")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(res).await, "not_found");

    create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "L", "capacity": 10, "stock": 0 }),
    )
    .await;

    let res = client.delete(srv.url("/warehouse/MWH.001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.delete(srv.url("/warehouse/MWH.001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client.get(srv.url("/warehouse/MWH.001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["archivedAt"].is_string());
}

#[tokio::test]
async fn replace_enforces_stock_and_capacity_then_succeeds() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "L", "capacity": 20, "stock": 5 }),
    )
    .await;

    let replace = |body: Value| {
        let client = client.clone();
        let url = srv.url("/warehouse/MWH.001/replacement");
        async move { client.post(url).json(&body).send().await.unwrap() }
    };

    let res = replace(json!({ "businessUnitCode": "MWH.001", "location": "L", "capacity": 20, "stock": 6 })).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = replace(json!({ "businessUnitCode": "MWH.001", "location": "L", "capacity": 3, "stock": 5 })).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = replace(json!({ "businessUnitCode": "MWH.002", "location": "L", "capacity": 10, "stock": 5 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Body code omitted: inherited from the path.
    let res = replace(json!({ "location": "TILBURG-001", "capacity": 10, "stock": 5 })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let replaced: Value = res.json().await.unwrap();
    assert_eq!(replaced["businessUnitCode"], "MWH.001");
    assert_eq!(replaced["location"], "TILBURG-001");
    assert_eq!(replaced["capacity"], 10);
    assert_eq!(replaced["stock"], 5);
    assert!(replaced["archivedAt"].is_null());

    let all: Vec<Value> = client
        .get(srv.url("/warehouse"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0]["archivedAt"].is_string());
    assert!(all[1]["archivedAt"].is_null());

    let res = client.get(srv.url("/warehouse/MWH.001")).send().await.unwrap();
    let current: Value = res.json().await.unwrap();
    assert_eq!(current["location"], "TILBURG-001");
}

#[tokio::test]
async fn replace_of_unknown_unit_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/warehouse/MWH.404/replacement"))
        .json(&json!({ "location": "L", "capacity": 10, "stock": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .post(srv.url("/warehouse/MWH.404/replacement"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn builtin_location_table_is_served_by_default() {
    let srv = TestServer::spawn_with(StaticLocationDirectory::builtin()).await;
    let client = reqwest::Client::new();

    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.001", "location": "VETSBY-001", "capacity": 90, "stock": 0 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = create(
        &client,
        &srv,
        json!({ "businessUnitCode": "MWH.002", "location": "VETSBY-001", "capacity": 1, "stock": 0 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
