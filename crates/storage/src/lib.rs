use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::{fs, path::Path, str::FromStr};
use tracing::info;

mod authz;
mod models;
mod repo;

pub use authz::OwnershipAuthorizer;

#[derive(Clone)]
pub struct Db {
    pub(crate) pool: Pool<Sqlite>,
}

impl Db {
    pub async fn new(db_url: &str) -> anyhow::Result<Self> {
        let in_memory = db_url.contains(":memory:");

        if db_url.starts_with("sqlite://") && !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://");
            let path = Path::new(path_str);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        if !in_memory && !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            info!("Creating database {}", db_url);
            Sqlite::create_database(db_url).await?;
        }

        let options = SqliteConnectOptions::from_str(db_url)?.foreign_keys(true);
        // Every in-memory connection is its own database, so pin the pool to one.
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        sqlx::query("PRAGMA journal_mode = WAL;")
            .execute(&pool)
            .await?;
        sqlx::query("PRAGMA synchronous = NORMAL;")
            .execute(&pool)
            .await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}
