use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateUserPayload {
            account_id: payload.account_id,
            name: payload.name,
            address: payload.address,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateUser)
    .map(response::Success::UserCreated)
}
