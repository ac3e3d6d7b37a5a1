use teloxide::types::ReplyMarkup;
use tracing::error;

use crate::formatters;
use crate::keyboards;
use crate::state::AppState;

/// Shared rendering path for the Signals menu button and the
/// refresh_signals callback, so both produce identical output.
pub async fn signals_view(state: &AppState) -> (String, ReplyMarkup) {
    match state.signal_service.recent_signals().await {
        Ok(signals) => (
            formatters::signal_list(&signals, state.config.display_tz),
            keyboards::signals_keyboard(&state.config.webapp_url).into(),
        ),
        Err(e) => {
            error!("Failed to load signals: {e}");
            (
                formatters::SIGNALS_UNAVAILABLE.to_string(),
                keyboards::main_menu().into(),
            )
        }
    }
}
