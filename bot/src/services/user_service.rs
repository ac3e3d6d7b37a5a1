use crate::repositories::user_repository::UserRepository;
use sea_orm::prelude::DatabaseConnection;
use shared::entity::users;
use shared::StoreError;
use std::sync::Arc;

pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let repo = UserRepository::new(db);
        Self { repo }
    }

    pub async fn get_current_user(&self, user_id: i64) -> Result<users::Model, StoreError> {
        self.repo.find_by_id(user_id).await
    }

    /// Entry-command registration. Safe to call on every /start: the
    /// underlying write is an upsert keyed by the user id.
    pub async fn register(
        &self,
        user_id: i64,
        username: Option<String>,
        first_name: Option<String>,
    ) -> Result<(), StoreError> {
        self.repo.upsert(user_id, username, first_name).await
    }
}
