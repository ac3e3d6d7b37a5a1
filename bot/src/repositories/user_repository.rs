use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use shared::entity::users;
use shared::StoreError;
use std::sync::Arc;

pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<users::Model, StoreError> {
        users::Entity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert-or-overwrite keyed by the Telegram user id. Only the profile
    /// columns are updated on conflict; subscription state set elsewhere
    /// survives a re-registration.
    pub async fn upsert(
        &self,
        user_id: i64,
        username: Option<String>,
        first_name: Option<String>,
    ) -> Result<(), StoreError> {
        let user = users::ActiveModel {
            id: Set(user_id),
            username: Set(username),
            first_name: Set(first_name),
            ..Default::default()
        };

        users::Entity::insert(user)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .update_columns([users::Column::Username, users::Column::FirstName])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::OnConflict;
    use sea_orm::ActiveValue::Set;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};
    use shared::entity::users;

    #[test]
    fn upsert_statement_updates_profile_columns_only() {
        let user = users::ActiveModel {
            id: Set(42),
            username: Set(Some("sam".to_string())),
            first_name: Set(Some("Sam".to_string())),
            ..Default::default()
        };

        let sql = users::Entity::insert(user)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .update_columns([users::Column::Username, users::Column::FirstName])
                    .to_owned(),
            )
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("ON CONFLICT"));
        assert!(sql.contains("excluded"));
        // Subscription state is never part of the write
        assert!(!sql.contains("is_vip"));
        assert!(!sql.contains("vip_expires_at"));
    }
}
