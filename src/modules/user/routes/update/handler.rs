use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Path(id) = id.map_err(|_| response::Error::InvalidUserId)?;
    let Json(body) = body.map_err(|err| {
        tracing::warn!("Rejected user update body: {}", err);
        response::Error::InvalidRequestBody
    })?;

    service(ctx, request::Payload { id, body }).await
}
