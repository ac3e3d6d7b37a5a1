use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use sqlx::PgPool;
use tracing::info;

pub async fn get_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to database pool");
    let pool = PgPool::connect(database_url).await?;
    Ok(pool)
}

pub async fn get_db_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database via Sea-ORM");
    let db = Database::connect(database_url).await?;
    Ok(db)
}

pub type DbPool = PgPool;
