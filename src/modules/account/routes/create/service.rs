use super::types::{request, response};
use crate::{modules::account::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateAccountPayload {
            email: payload.email,
            password: payload.password,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        _ => response::Error::FailedToCreateAccount,
    })
    .map(response::Success::AccountCreated)
}
