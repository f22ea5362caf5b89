#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use food_ordering_api::{
    app,
    types::{database, AppConfig, Context},
};
use mongodb::Client;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

/// Context whose stores are never contacted until a query runs.
pub async fn lazy_context() -> Arc<Context> {
    lazy_context_serving("./web").await
}

pub async fn lazy_context_serving(static_dir: &str) -> Arc<Context> {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://postgres@127.0.0.1:1/unreachable")
        .expect("valid postgres url");

    let client = Client::with_uri_str("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=1000")
        .await
        .expect("valid mongodb uri");

    Arc::new(Context {
        app: AppConfig {
            host: String::from("127.0.0.1"),
            port: 0,
            static_dir: String::from(static_dir),
        },
        db_conn: database::DatabaseConnection { pool },
        doc_conn: database::DocumentConnection {
            db: client.database("food_ordering_test"),
            client,
        },
    })
}

pub async fn router() -> Router {
    app::build_router(lazy_context().await)
}

pub async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("valid request");

    let response = router.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
