use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

use super::password;
use crate::utils::database::{self, QueryError};

/// Public view of an account. The password hash is not part of it.
#[derive(Serialize, FromRow, Clone, Debug, PartialEq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Account row together with its stored hash, for credential checks only.
#[derive(FromRow, Clone)]
pub struct AccountWithPassword {
    #[sqlx(flatten)]
    pub account: Account,
    pub password_hash: String,
}

impl From<AccountWithPassword> for Account {
    fn from(value: AccountWithPassword) -> Self {
        value.account
    }
}

pub struct CreateAccountPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    EmailAlreadyInUse,
    InvalidCredentials,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateAccountPayload) -> Result<Account> {
    let password_hash = password::hash(payload.password)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    database::with_timeout(
        sqlx::query_as::<_, Account>(
            "
            INSERT INTO accounts (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, created_at, updated_at
            ",
        )
        .bind(payload.email)
        .bind(password_hash)
        .fetch_one(e),
    )
    .await
    .map_err(|err| match err {
        QueryError::Failed(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Error::EmailAlreadyInUse
        }
        err => {
            tracing::error!("Error occurred while creating an account: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Account> {
    database::with_timeout(
        sqlx::query_as::<_, Account>(
            "SELECT id, email, created_at, updated_at FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(e),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching account with id {}: {}", id, err);
        Error::UnexpectedError
    })?
    .ok_or(Error::NotFound)
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<AccountWithPassword> {
    database::with_timeout(
        sqlx::query_as::<_, AccountWithPassword>(
            "
            SELECT id, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(e),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occurred in find_by_email: {}", err);
        Error::UnexpectedError
    })?
    .ok_or(Error::NotFound)
}

pub async fn verify_password(account: &AccountWithPassword, plaintext: String) -> Result<()> {
    password::verify(account.password_hash.clone(), plaintext)
        .await
        .map_err(|err| match err {
            password::Error::Mismatch => Error::InvalidCredentials,
            password::Error::HashingFailed => Error::UnexpectedError,
        })
}
