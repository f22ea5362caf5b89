pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(range(min = 1, message = "Account ID is required"))]
        pub account_id: i32,
        #[serde(default)]
        #[validate(range(min = 1, message = "Food ID is required"))]
        pub food_id: i32,
        #[serde(default)]
        #[validate(range(min = 1, message = "Restaurant ID is required"))]
        pub restaurant_id: i32,
        #[serde(default)]
        #[validate(range(exclusive_min = 0.0, message = "Total price must be positive"))]
        pub total_price: f64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::order::repository::Order, utils::validation};

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!(order))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidRequestBody,
        FailedToValidate(ValidationErrors),
        InvalidFoodId,
        InvalidRestaurantId,
        FoodNotFromRestaurant,
        FailedToCreateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidRequestBody => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid request body" })),
                )
                    .into_response(),
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidFoodId => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid food ID" })),
                )
                    .into_response(),
                Self::InvalidRestaurantId => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid restaurant ID" })),
                )
                    .into_response(),
                Self::FoodNotFromRestaurant => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Food does not belong to the specified restaurant" })),
                )
                    .into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
