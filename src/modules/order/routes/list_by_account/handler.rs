use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::PathRejection, Path, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    account_id: Result<Path<i32>, PathRejection>,
) -> response::Response {
    let Path(account_id) = account_id.map_err(|_| response::Error::InvalidAccountId)?;

    service(ctx, request::Payload { account_id }).await
}
