pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;

pub use config::Config;
pub use database::{get_db_connection, get_pool, DbPool};
pub use error::StoreError;
pub use models::{Direction, SignalStatus};
