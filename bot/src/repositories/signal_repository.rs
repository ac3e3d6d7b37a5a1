use sea_orm::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use shared::entity::signals;
use shared::StoreError;
use std::sync::Arc;

pub struct SignalRepository {
    db: Arc<DatabaseConnection>,
}

impl SignalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Up to `limit` signals, most recently created first.
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<signals::Model>, StoreError> {
        let signals = signals::Entity::find()
            .order_by_desc(signals::Column::CreatedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        Ok(signals)
    }
}
