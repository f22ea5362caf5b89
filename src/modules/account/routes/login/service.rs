use super::types::{request, response};
use crate::{
    modules::account::{password, repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    // An unknown email and a wrong password look the same to the caller,
    // in body and in time spent hashing.
    let account = match repository::find_by_email(&ctx.db_conn.pool, payload.email).await {
        Ok(account) => account,
        Err(repository::Error::NotFound) => {
            password::verify_dummy(payload.password).await;
            return Err(response::Error::InvalidCredentials);
        }
        Err(_) => return Err(response::Error::FailedToFetchAccount),
    };

    repository::verify_password(&account, payload.password)
        .await
        .map_err(|err| match err {
            repository::Error::InvalidCredentials => response::Error::InvalidCredentials,
            _ => response::Error::UnexpectedError,
        })?;

    tracing::info!("Account {} logged in", account.account.id);

    Ok(response::Success::LoggedIn(account.into()))
}
