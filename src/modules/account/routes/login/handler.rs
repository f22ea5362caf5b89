use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::JsonRejection, Json, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<request::Payload>, JsonRejection>,
) -> response::Response {
    let Json(payload) = body.map_err(|err| {
        tracing::warn!("Rejected login body: {}", err);
        response::Error::InvalidRequestBody
    })?;

    service(ctx, payload).await
}
