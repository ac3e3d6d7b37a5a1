use crate::repositories::signal_repository::SignalRepository;
use sea_orm::prelude::DatabaseConnection;
use shared::entity::signals;
use shared::StoreError;
use std::sync::Arc;

/// How many signals the signals view shows.
pub const RECENT_SIGNALS_LIMIT: u64 = 5;

pub struct SignalService {
    repo: SignalRepository,
}

impl SignalService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let repo = SignalRepository::new(db);
        Self { repo }
    }

    pub async fn recent_signals(&self) -> Result<Vec<signals::Model>, StoreError> {
        self.repo.list_recent(RECENT_SIGNALS_LIMIT).await
    }
}
