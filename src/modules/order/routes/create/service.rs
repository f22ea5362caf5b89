use super::types::{request, response};
use crate::{
    modules::{catalog, order::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

/// Checks the order against the static catalog before anything is stored.
fn check_catalog(payload: &request::Payload) -> Result<(), response::Error> {
    let food = catalog::repository::find_food_by_id(payload.food_id)
        .ok_or(response::Error::InvalidFoodId)?;

    catalog::repository::find_restaurant_by_id(payload.restaurant_id)
        .ok_or(response::Error::InvalidRestaurantId)?;

    if food.restaurant_id != payload.restaurant_id {
        return Err(response::Error::FoodNotFromRestaurant);
    }

    Ok(())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    check_catalog(&payload)?;

    repository::create(
        &ctx.doc_conn.db,
        repository::CreateOrderPayload {
            account_id: payload.account_id,
            food_id: payload.food_id,
            restaurant_id: payload.restaurant_id,
            total_price: payload.total_price,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)
    .map(response::Success::OrderCreated)
}
