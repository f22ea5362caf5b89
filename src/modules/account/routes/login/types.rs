pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(length(min = 1, message = "Email is required"))]
        pub email: String,
        #[serde(default)]
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::account::repository::Account, utils::validation};

    pub enum Success {
        LoggedIn(Account),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn(account) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Login successful",
                        "account": account
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidRequestBody,
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        FailedToFetchAccount,
        UnexpectedError,
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
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid credentials" })),
                )
                    .into_response(),
                Self::FailedToFetchAccount => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch account" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;

}
