use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot` and `ready`

use review_room::{
    app::{build_router, AppState},
    catalog::CatalogClient,
    database::AppDatabase,
    images::ImageResolver,
};

use super::catalog::{FakeCatalog, TEST_API_KEY};

pub const TEST_IMAGE_BASE_URL: &str = "https://images.test/t/p";

/// Database handle that is never connected. Enough for requests rejected
/// before they reach the database.
pub async fn get_database() -> AppDatabase {
    AppDatabase::with_uri("mongodb://127.0.0.1:27017")
        .await
        .expect("Unable to build database client")
}

pub async fn get_app(catalog: &FakeCatalog) -> Router {
    let state = AppState {
        db: Arc::new(get_database().await),
        catalog: Arc::new(CatalogClient::with_config(&catalog.base_url, TEST_API_KEY)),
        images: Arc::new(ImageResolver::with_base_url(TEST_IMAGE_BASE_URL)),
    };
    build_router(state)
}

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn build_get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
