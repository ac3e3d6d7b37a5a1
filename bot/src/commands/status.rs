use chrono::Utc;
use teloxide::types::ReplyMarkup;
use tracing::error;

use crate::formatters;
use crate::keyboards;
use crate::state::AppState;
use shared::StoreError;

/// Shared rendering path for the My Status menu button and the
/// refresh_status callback.
pub async fn status_view(state: &AppState, user_id: i64) -> (String, ReplyMarkup) {
    match state.user_service.get_current_user(user_id).await {
        Ok(user) => (
            formatters::user_status(Some(&user), Utc::now()),
            keyboards::status_keyboard().into(),
        ),
        Err(StoreError::NotFound) => (
            formatters::user_status(None, Utc::now()),
            keyboards::main_menu().into(),
        ),
        Err(e) => {
            error!("Failed to load user {}: {}", user_id, e);
            (
                formatters::STATUS_UNAVAILABLE.to_string(),
                keyboards::main_menu().into(),
            )
        }
    }
}
