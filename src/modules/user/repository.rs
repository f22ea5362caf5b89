use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

use crate::utils::database;

#[derive(Serialize, FromRow, Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub account_id: i32,
    pub name: String,
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub struct CreateUserPayload {
    pub account_id: i32,
    pub name: String,
    pub address: String,
}

pub struct UpdateUserPayload {
    pub name: String,
    pub address: String,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    database::with_timeout(
        sqlx::query_as::<_, User>(
            "
            INSERT INTO users (account_id, name, address)
            VALUES ($1, $2, $3)
            RETURNING id, account_id, name, address, created_at, updated_at
            ",
        )
        .bind(payload.account_id)
        .bind(payload.name)
        .bind(payload.address)
        .fetch_one(e),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occured while creating a user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<User> {
    database::with_timeout(
        sqlx::query_as::<_, User>(
            "
            SELECT id, account_id, name, address, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(e),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
        Error::UnexpectedError
    })?
    .ok_or(Error::NotFound)
}

/// Lowest-id user of the account. The store does not stop an account from
/// owning several users.
pub async fn find_by_account_id<'e, E: PgExecutor<'e>>(e: E, account_id: i32) -> Result<User> {
    database::with_timeout(
        sqlx::query_as::<_, User>(
            "
            SELECT id, account_id, name, address, created_at, updated_at
            FROM users
            WHERE account_id = $1
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(account_id)
        .fetch_optional(e),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching user with account id {}: {}",
            account_id,
            err
        );
        Error::UnexpectedError
    })?
    .ok_or(Error::NotFound)
}

/// Overwrites both fields and returns the stored row.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateUserPayload,
) -> Result<User> {
    database::with_timeout(
        sqlx::query_as::<_, User>(
            "
            UPDATE users SET
                name = $1,
                address = $2,
                updated_at = NOW()
            WHERE
                id = $3
            RETURNING id, account_id, name, address, created_at, updated_at
            ",
        )
        .bind(payload.name)
        .bind(payload.address)
        .bind(id)
        .fetch_optional(e),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating user with id {}: {}", id, err);
        Error::UnexpectedError
    })?
    .ok_or(Error::NotFound)
}
