pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(
            length(min = 1, message = "Email is required"),
            email(message = "Invalid email address")
        )]
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
        AccountCreated(Account),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountCreated(account) => {
                    (StatusCode::CREATED, Json(json!(account))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidRequestBody,
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        FailedToCreateAccount,
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
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::FailedToCreateAccount => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create account" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;

}
