use super::repository;
use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::types::Context;

async fn get_restaurants() -> impl IntoResponse {
    (StatusCode::OK, Json(json!(repository::list_restaurants())))
}

async fn get_restaurant_by_id(id: Result<Path<i32>, PathRejection>) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid restaurant ID" })),
        );
    };

    match repository::find_restaurant_by_id(id) {
        Some(restaurant) => (StatusCode::OK, Json(json!(restaurant))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Restaurant not found" })),
        ),
    }
}

async fn get_foods_by_restaurant_id(id: Result<Path<i32>, PathRejection>) -> impl IntoResponse {
    match id {
        Ok(Path(id)) => (
            StatusCode::OK,
            Json(json!(repository::list_foods_by_restaurant_id(id))),
        ),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid restaurant ID" })),
        ),
    }
}

async fn get_foods() -> impl IntoResponse {
    (StatusCode::OK, Json(json!(repository::list_foods())))
}

async fn get_food_by_id(id: Result<Path<i32>, PathRejection>) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid food ID" })),
        );
    };

    match repository::find_food_by_id(id) {
        Some(food) => (StatusCode::OK, Json(json!(food))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Food not found" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/restaurants", get(get_restaurants))
        .route("/restaurants/:id", get(get_restaurant_by_id))
        .route("/restaurants/:id/foods", get(get_foods_by_restaurant_id))
        .route("/foods", get(get_foods))
        .route("/foods/:id", get(get_food_by_id))
}
