pub use crate::utils::database;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use std::{env, fmt, str::FromStr};

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "{} not set", key),
            Self::Invalid(key) => write!(f, "{} has an invalid value", key),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins over the individual connection parameters.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse::<PgConnectOptions>(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}

#[derive(Clone)]
pub struct DocumentStoreConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub document_store: DocumentStoreConfig,
}

fn var_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid(key)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongodb_uri =
            env::var("MONGODB_URI").map_err(|_| ConfigError::Missing("MONGODB_URI"))?;

        Ok(Self {
            app: AppConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parse_var_or("PORT", 8080)?,
                static_dir: var_or("STATIC_DIR", "./web"),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                host: var_or("POSTGRES_HOST", "localhost"),
                port: parse_var_or("POSTGRES_PORT", 5432)?,
                user: var_or("POSTGRES_USER", "postgres"),
                password: var_or("POSTGRES_PASSWORD", ""),
                name: var_or("POSTGRES_DATABASE", "demo_db"),
                max_connections: parse_var_or("DATABASE_MAX_CONNECTIONS", 25)?,
            },
            document_store: DocumentStoreConfig {
                uri: mongodb_uri,
                database: var_or("MONGODB_DATABASE", "demo_db"),
            },
        })
    }
}

/// Everything a request handler needs, built once at startup and shared by
/// reference.
#[derive(Clone)]
pub struct Context {
    pub app: AppConfig,
    pub db_conn: database::DatabaseConnection,
    pub doc_conn: database::DocumentConnection,
}

#[derive(Debug)]
pub enum ContextError {
    Database(sqlx::Error),
    DocumentStore(mongodb::error::Error),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(err) => write!(f, "relational store unavailable: {}", err),
            Self::DocumentStore(err) => write!(f, "document store unavailable: {}", err),
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let db_options = self
            .database
            .connect_options()
            .map_err(ContextError::Database)?;
        let db_conn = database::connect(db_options, self.database.max_connections)
            .await
            .map_err(ContextError::Database)?;

        let doc_conn = database::connect_document_store(
            &self.document_store.uri,
            &self.document_store.database,
        )
        .await
        .map_err(ContextError::DocumentStore)?;

        Ok(Context {
            app: self.app,
            db_conn,
            doc_conn,
        })
    }
}
