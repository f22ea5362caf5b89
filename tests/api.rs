//! Router-level behaviour without live backing stores: the static catalog,
//! request validation, identifier parsing and the responses given when a
//! store cannot be reached.

mod common;

use axum::http::{Method, StatusCode};
use common::{lazy_context_serving, router, send};
use food_ordering_api::app;
use serde_json::{json, Value};

#[tokio::test]
async fn health_check_reports_ok() {
    let (status, body) = send(router().await, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_restaurants_and_foods() {
    let (status, body) = send(router().await, Method::GET, "/api/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));

    let (status, body) = send(router().await, Method::GET, "/api/foods", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn gets_a_single_restaurant_and_food() {
    let (status, body) = send(router().await, Method::GET, "/api/restaurants/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 2, "name": "Sushi World", "address": "456 Oak Ave", "cuisine": "Japanese" })
    );

    let (status, body) = send(router().await, Method::GET, "/api/foods/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "California Roll");
    assert_eq!(body["restaurant_id"], 2);
}

#[tokio::test]
async fn missing_catalog_entries_are_not_found() {
    let (status, body) = send(router().await, Method::GET, "/api/restaurants/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");

    let (status, body) = send(router().await, Method::GET, "/api/foods/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Food not found");
}

#[tokio::test]
async fn non_numeric_catalog_ids_are_bad_requests() {
    let (status, body) = send(router().await, Method::GET, "/api/restaurants/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid restaurant ID");

    let (status, _) = send(router().await, Method::GET, "/api/foods/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn foods_of_a_restaurant() {
    let (status, body) = send(router().await, Method::GET, "/api/restaurants/1/foods", None).await;
    assert_eq!(status, StatusCode::OK);
    let names = body
        .as_array()
        .unwrap()
        .iter()
        .map(|food| food["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Margherita Pizza", "Pepperoni Pizza"]);

    let (status, body) = send(router().await, Method::GET, "/api/restaurants/99/foods", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn order_with_non_positive_price_is_rejected() {
    for total_price in [0.0, -4.5] {
        let (status, body) = send(
            router().await,
            Method::POST,
            "/api/orders",
            Some(json!({
                "account_id": 1,
                "food_id": 1,
                "restaurant_id": 1,
                "total_price": total_price
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Total price must be positive");
    }
}

#[tokio::test]
async fn order_for_food_of_another_restaurant_is_rejected() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/orders",
        Some(json!({
            "account_id": 1,
            "food_id": 3,
            "restaurant_id": 1,
            "total_price": 8.99
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Food does not belong to the specified restaurant");
}

#[tokio::test]
async fn order_for_unknown_food_or_restaurant_is_rejected() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/orders",
        Some(json!({ "account_id": 1, "food_id": 42, "restaurant_id": 1, "total_price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid food ID");

    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/orders",
        Some(json!({ "account_id": 1, "food_id": 1, "restaurant_id": 42, "total_price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid restaurant ID");
}

#[tokio::test]
async fn order_with_missing_fields_is_rejected() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/orders",
        Some(json!({ "food_id": 1, "restaurant_id": 1, "total_price": 12.99 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Account ID is required");
}

#[tokio::test]
async fn malformed_order_body_is_rejected() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/orders",
        Some(json!({ "account_id": "one" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let (status, body) = send(router().await, Method::POST, "/api/orders", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn malformed_order_ids_are_bad_requests() {
    let (status, body) = send(router().await, Method::GET, "/api/orders/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid order ID");

    let (status, body) = send(router().await, Method::GET, "/api/orders/account/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid account ID");
}

#[tokio::test]
async fn account_creation_requires_email_and_password() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/accounts",
        Some(json!({ "email": "", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required, Password is required");

    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/accounts",
        Some(json!({ "email": "not-an-email", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");
}

#[tokio::test]
async fn login_requires_both_fields_and_never_echoes_the_password() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/accounts/login",
        Some(json!({ "email": "", "password": "hunter22" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required");
    assert!(!body.to_string().contains("hunter22"));
}

#[tokio::test]
async fn non_numeric_account_and_user_ids_are_bad_requests() {
    let (status, body) = send(router().await, Method::GET, "/api/accounts/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid account ID");

    let (status, body) = send(router().await, Method::GET, "/api/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user ID");

    let (status, body) = send(router().await, Method::GET, "/api/users/account/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid account ID");
}

#[tokio::test]
async fn user_creation_requires_account_and_name() {
    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/users",
        Some(json!({ "account_id": 0, "name": "Ada", "address": "1 Loop Rd" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Account ID is required");

    let (status, body) = send(
        router().await,
        Method::POST,
        "/api/users",
        Some(json!({ "account_id": 1, "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
}

#[tokio::test]
async fn user_update_requires_a_name_and_numeric_id() {
    let (status, body) = send(
        router().await,
        Method::PUT,
        "/api/users/1",
        Some(json!({ "name": "", "address": "somewhere" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");

    let (status, body) = send(
        router().await,
        Method::PUT,
        "/api/users/abc",
        Some(json!({ "name": "Ada", "address": "somewhere" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user ID");
}

#[tokio::test]
async fn wrong_method_gets_an_error_body() {
    let (status, body) = send(router().await, Method::GET, "/api/accounts/login", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));

    let (status, body) = send(router().await, Method::DELETE, "/api/orders", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn non_api_paths_are_served_from_the_static_dir() {
    let dir = std::env::temp_dir().join(format!("food_ordering_static_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("menu.json"), r#"{"served":true}"#).unwrap();

    let router = app::build_router(lazy_context_serving(dir.to_str().unwrap()).await);

    let (status, body) = send(router.clone(), Method::GET, "/menu.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "served": true }));

    let (status, _) = send(router, Method::GET, "/missing.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&dir).unwrap();
}

async fn assert_store_failure(method: Method, uri: &str, body: Option<Value>, error: &str) {
    let (status, response) = send(router().await, method, uri, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    assert_eq!(response, json!({ "error": error }), "{uri}");
}

#[tokio::test]
async fn unreachable_relational_store_is_an_internal_error() {
    assert_store_failure(Method::GET, "/api/accounts/1", None, "Failed to fetch account").await;
    assert_store_failure(
        Method::POST,
        "/api/accounts",
        Some(json!({ "email": "ada@example.com", "password": "hunter22" })),
        "Failed to create account",
    )
    .await;
    assert_store_failure(
        Method::POST,
        "/api/accounts/login",
        Some(json!({ "email": "ada@example.com", "password": "hunter22" })),
        "Failed to fetch account",
    )
    .await;
    assert_store_failure(Method::GET, "/api/users/1", None, "Failed to fetch user").await;
    assert_store_failure(Method::GET, "/api/users/account/1", None, "Failed to fetch user").await;
    assert_store_failure(
        Method::POST,
        "/api/users",
        Some(json!({ "account_id": 1, "name": "Ada", "address": "1 Loop Rd" })),
        "Failed to create user",
    )
    .await;
    assert_store_failure(
        Method::PUT,
        "/api/users/1",
        Some(json!({ "name": "Ada", "address": "1 Loop Rd" })),
        "Failed to update user",
    )
    .await;
}

#[tokio::test]
async fn unreachable_document_store_is_an_internal_error() {
    assert_store_failure(Method::GET, "/api/orders", None, "Failed to fetch orders").await;
    assert_store_failure(
        Method::GET,
        "/api/orders/65a1b2c3d4e5f6a7b8c9d0e1",
        None,
        "Failed to fetch order",
    )
    .await;
    assert_store_failure(Method::GET, "/api/orders/account/1", None, "Failed to fetch orders").await;
    assert_store_failure(
        Method::POST,
        "/api/orders",
        Some(json!({
            "account_id": 1,
            "food_id": 1,
            "restaurant_id": 1,
            "total_price": 12.99
        })),
        "Failed to create order",
    )
    .await;
}
