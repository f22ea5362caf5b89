pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::account::repository::Account;

    pub enum Success {
        Account(Account),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Account(account) => (StatusCode::OK, Json(json!(account))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidAccountId,
        AccountNotFound,
        FailedToFetchAccount,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidAccountId => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid account ID" })),
                )
                    .into_response(),
                Self::AccountNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Account not found" })),
                )
                    .into_response(),
                Self::FailedToFetchAccount => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch account" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
