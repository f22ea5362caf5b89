//! Orders live in the document store, one document per order in the
//! `orders` collection. Account, food and restaurant ids are plain values;
//! nothing here checks that they point at anything.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::utils::database;

const COLLECTION: &str = "orders";

/// Stored shape of an order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub account_id: i32,
    pub food_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub created_at: BsonDateTime,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub account_id: i32,
    pub food_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<OrderDocument> for Order {
    fn from(value: OrderDocument) -> Self {
        Self {
            id: value.id.to_hex(),
            account_id: value.account_id,
            food_id: value.food_id,
            restaurant_id: value.restaurant_id,
            total_price: value.total_price,
            created_at: value.created_at.to_chrono(),
        }
    }
}

pub struct CreateOrderPayload {
    pub account_id: i32,
    pub food_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidId,
    NotFound,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

fn collection(db: &Database) -> Collection<OrderDocument> {
    db.collection::<OrderDocument>(COLLECTION)
}

/// Inserts a new order, stamping its id and creation time.
pub async fn create(db: &Database, payload: CreateOrderPayload) -> Result<Order> {
    let document = OrderDocument {
        id: ObjectId::new(),
        account_id: payload.account_id,
        food_id: payload.food_id,
        restaurant_id: payload.restaurant_id,
        total_price: payload.total_price,
        created_at: BsonDateTime::now(),
    };

    database::with_timeout(collection(db).insert_one(&document, None))
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while creating an order: {}", err);
            Error::UnexpectedError
        })?;

    Ok(document.into())
}

pub async fn find_by_id(db: &Database, id: &str) -> Result<Order> {
    let object_id = ObjectId::parse_str(id).map_err(|_| Error::InvalidId)?;

    database::with_timeout(collection(db).find_one(doc! { "_id": object_id }, None))
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order with id {}: {}", id, err);
            Error::UnexpectedError
        })?
        .map(Order::from)
        .ok_or(Error::NotFound)
}

/// Empty when the account has no orders.
pub async fn find_many_by_account_id(db: &Database, account_id: i32) -> Result<Vec<Order>> {
    find_many(db, doc! { "account_id": account_id }).await
}

/// Every order in the collection, unpaginated.
pub async fn find_many_all(db: &Database) -> Result<Vec<Order>> {
    find_many(db, doc! {}).await
}

async fn find_many(db: &Database, filter: Document) -> Result<Vec<Order>> {
    let documents = database::with_timeout(async {
        let cursor = collection(db).find(filter.clone(), None).await?;
        cursor.try_collect::<Vec<OrderDocument>>().await
    })
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders matching {}: {}",
            filter,
            err
        );
        Error::UnexpectedError
    })?;

    Ok(documents.into_iter().map(Order::from).collect())
}
