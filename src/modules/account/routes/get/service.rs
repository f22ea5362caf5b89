use super::types::{request, response};
use crate::{modules::account::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|err| match err {
            repository::Error::NotFound => response::Error::AccountNotFound,
            _ => response::Error::FailedToFetchAccount,
        })
        .map(response::Success::Account)
}
