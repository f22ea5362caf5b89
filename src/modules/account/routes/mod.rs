mod create;
mod get;
mod login;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(login::get_router())
        .merge(get::get_router())
}
