use axum::Router;

use super::{account, catalog, order, user};
use crate::types::Context;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/accounts", account::get_router())
        .nest("/users", user::get_router())
        .nest("/orders", order::get_router())
        .merge(catalog::get_router())
}
