pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    /// Both fields replace the stored values; there is no partial update.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(default)]
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: String,
        #[serde(default)]
        pub address: String,
    }

    pub struct Payload {
        pub id: i32,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::user::repository::User, utils::validation};

    pub enum Success {
        UserUpdated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserUpdated(user) => (StatusCode::OK, Json(json!(user))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidUserId,
        InvalidRequestBody,
        FailedToValidate(ValidationErrors),
        UserNotFound,
        FailedToUpdateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidUserId => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid user ID" })),
                )
                    .into_response(),
                Self::InvalidRequestBody => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid request body" })),
                )
                    .into_response(),
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
