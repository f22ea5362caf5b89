use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, Path(id): Path<String>) -> response::Response {
    service(ctx, request::Payload { id }).await
}
