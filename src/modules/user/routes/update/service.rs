use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateUserPayload {
            name: payload.body.name,
            address: payload.body.address,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NotFound => response::Error::UserNotFound,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateUser,
    })
    .map(response::Success::UserUpdated)
}
