use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.doc_conn.db, &payload.id)
        .await
        .map_err(|err| match err {
            repository::Error::InvalidId => response::Error::InvalidOrderId,
            repository::Error::NotFound => response::Error::OrderNotFound,
            repository::Error::UnexpectedError => response::Error::FailedToFetchOrder,
        })
        .map(response::Success::Order)
}
