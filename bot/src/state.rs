use crate::services::signal_service::SignalService;
use crate::services::user_service::UserService;
use sea_orm::DatabaseConnection;
use shared::{get_db_connection, get_pool, Config, DbPool};
use std::sync::Arc;

pub type HandlerResult = Result<(), anyhow::Error>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Arc<DatabaseConnection>,
    pub pool: Arc<DbPool>,
    pub user_service: Arc<UserService>,
    pub signal_service: Arc<SignalService>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let pool = get_pool(&config.database_url).await?;
        let db = Arc::new(get_db_connection(&config.database_url).await?);
        tracing::info!("Connected to database successfully");

        let user_service = Arc::new(UserService::new(db.clone()));
        let signal_service = Arc::new(SignalService::new(db.clone()));

        Ok(AppState {
            config,
            db,
            pool: Arc::new(pool),
            user_service,
            signal_service,
        })
    }
}
