use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::formatters;
use crate::keyboards;
use crate::notifier::Notifier;
use crate::state::{AppState, HandlerResult};

/// Entry command: upsert the invoking user, then show the main menu. A
/// failed write is surfaced as a retryable message rather than dropped.
pub async fn handle_start(msg: Message, state: Arc<AppState>, notifier: Notifier) -> HandlerResult {
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };
    let user_id = from.id.0 as i64;

    info!("Processing /start command from user {}", user_id);

    let registered = state
        .user_service
        .register(
            user_id,
            from.username.clone(),
            Some(from.first_name.clone()),
        )
        .await;

    match registered {
        Ok(()) => {
            let text = formatters::welcome(&state.config.bot_name);
            notifier
                .send(msg.chat.id, &text, Some(keyboards::main_menu().into()))
                .await;
        }
        Err(e) => {
            error!("Failed to register user {}: {}", user_id, e);
            notifier
                .send(
                    msg.chat.id,
                    formatters::REGISTRATION_FAILED,
                    Some(keyboards::main_menu().into()),
                )
                .await;
        }
    }

    Ok(())
}
