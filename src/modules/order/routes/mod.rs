mod create;
mod get;
mod list;
mod list_by_account;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(list_by_account::get_router())
        .merge(get::get_router())
}
