use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::{fmt, future::Future, time::Duration};

/// Upper bound for a single call against either backing store.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

impl DatabaseConnection {
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Postgres connection pool closed");
    }
}

#[derive(Clone)]
pub struct DocumentConnection {
    pub client: Client,
    pub db: Database,
}

impl DocumentConnection {
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}

pub async fn connect(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DatabaseConnection, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(STORE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(|err| {
            tracing::error!("Failed to connect to Postgres: {}", err);
            err
        })?;

    sqlx::query("SELECT 1").execute(&pool).await.map_err(|err| {
        tracing::error!("Failed to ping Postgres: {}", err);
        err
    })?;

    tracing::info!("Postgres connected");
    Ok(DatabaseConnection { pool })
}

pub async fn connect_document_store(
    uri: &str,
    database: &str,
) -> mongodb::error::Result<DocumentConnection> {
    let mut options = ClientOptions::parse(uri).await.map_err(|err| {
        tracing::error!("Invalid MongoDB connection uri: {}", err);
        err
    })?;
    options.app_name = Some(String::from("food_ordering_api"));
    options.connect_timeout = Some(STORE_TIMEOUT);
    options.server_selection_timeout = Some(STORE_TIMEOUT);

    let client = Client::with_options(options)?;
    let db = client.database(database);

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|err| {
            tracing::error!("Failed to ping MongoDB: {}", err);
            err
        })?;

    tracing::info!("MongoDB connected to database {}", database);
    Ok(DocumentConnection { client, db })
}

/// Failure of a store call made through [`with_timeout`].
#[derive(Debug)]
pub enum QueryError<E> {
    TimedOut,
    Failed(E),
}

impl<E: fmt::Display> fmt::Display for QueryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimedOut => write!(f, "store call timed out after {:?}", STORE_TIMEOUT),
            Self::Failed(err) => write!(f, "{}", err),
        }
    }
}

pub async fn with_timeout<F, T, E>(query: F) -> Result<T, QueryError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(STORE_TIMEOUT, query).await {
        Ok(result) => result.map_err(QueryError::Failed),
        Err(_) => Err(QueryError::TimedOut),
    }
}
