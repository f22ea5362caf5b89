pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(range(min = 1, message = "Account ID is required"))]
        pub account_id: i32,
        #[serde(default)]
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: String,
        #[serde(default)]
        pub address: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::user::repository::User, utils::validation};

    pub enum Success {
        UserCreated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserCreated(user) => (StatusCode::CREATED, Json(json!(user))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidRequestBody,
        FailedToValidate(ValidationErrors),
        FailedToCreateUser,
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
                Self::FailedToCreateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
