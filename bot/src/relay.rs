//! Change-event relay: forwards signal inserts and pending->resolved
//! transitions from the store to the admin chat.
//!
//! The store side is a Postgres trigger notifying the `signal_events`
//! channel with the operation plus the prior and new row. Filtering happens
//! here, per event: the store pushes every update.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::postgres::PgListener;
use std::sync::Arc;
use std::time::Duration;
use teloxide::types::ChatId;
use tracing::{error, info, warn};

use crate::formatters;
use crate::notifier::Notifier;
use crate::state::AppState;
use shared::SignalStatus;

const SIGNAL_EVENTS_CHANNEL: &str = "signal_events";
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeOp {
    Insert,
    Update,
}

/// Row image as serialized by the trigger's `row_to_json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalRow {
    pub id: i64,
    pub asset: String,
    pub direction: String,
    pub timeframe_minutes: i32,
    pub status: String,
    pub is_free: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalEvent {
    pub op: ChangeOp,
    pub before: Option<SignalRow>,
    pub after: SignalRow,
}

/// The only update transition worth announcing: the prior row was pending
/// and the new row is resolved. No-op updates and edits to already
/// resolved signals stay silent.
pub fn is_resolution(before: Option<&SignalRow>, after: &SignalRow) -> bool {
    let was_pending = before
        .and_then(|b| SignalStatus::from_db(&b.status))
        .map(|s| s == SignalStatus::Pending)
        .unwrap_or(false);
    let now_resolved = SignalStatus::from_db(&after.status)
        .map(|s| s.is_resolved())
        .unwrap_or(false);
    was_pending && now_resolved
}

pub async fn run(state: Arc<AppState>, notifier: Notifier) {
    loop {
        if let Err(e) = listen_loop(&state, &notifier).await {
            error!("Signal event subscription failed: {e:#}");
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    }
}

async fn listen_loop(state: &AppState, notifier: &Notifier) -> Result<(), anyhow::Error> {
    let mut listener = PgListener::connect_with(state.pool.as_ref()).await?;
    listener.listen(SIGNAL_EVENTS_CHANNEL).await?;
    info!("Relay listening on {}", SIGNAL_EVENTS_CHANNEL);

    loop {
        match listener.try_recv().await? {
            Some(notification) => {
                handle_payload(notification.payload(), state, notifier).await;
            }
            // The listener reconnects on its own; nothing to do but say so.
            None => warn!("Store connection dropped, listener reconnecting"),
        }
    }
}

async fn handle_payload(payload: &str, state: &AppState, notifier: &Notifier) {
    let event: SignalEvent = match serde_json::from_str(payload) {
        Ok(event) => event,
        Err(e) => {
            warn!("Ignoring malformed signal event: {e}");
            return;
        }
    };

    let admin = ChatId(state.config.admin_chat_id);
    match event.op {
        ChangeOp::Insert => {
            let text = formatters::new_signal_alert(&event.after, state.config.display_tz);
            notifier.send(admin, &text, None).await;
        }
        ChangeOp::Update => {
            if is_resolution(event.before.as_ref(), &event.after) {
                let text = formatters::signal_result_alert(&event.after);
                notifier.send(admin, &text, None).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> SignalRow {
        SignalRow {
            id: 1,
            asset: "EUR/USD".to_string(),
            direction: "up".to_string(),
            timeframe_minutes: 5,
            status: status.to_string(),
            is_free: false,
            created_at: None,
            expires_at: None,
        }
    }

    #[test]
    fn pending_to_profit_is_a_resolution() {
        let before = row("pending");
        assert!(is_resolution(Some(&before), &row("profit")));
    }

    #[test]
    fn pending_to_loss_is_a_resolution() {
        let before = row("pending");
        assert!(is_resolution(Some(&before), &row("loss")));
    }

    #[test]
    fn noop_updates_stay_silent() {
        let pending = row("pending");
        let profit = row("profit");
        assert!(!is_resolution(Some(&pending), &row("pending")));
        assert!(!is_resolution(Some(&profit), &row("profit")));
    }

    #[test]
    fn missing_prior_row_stays_silent() {
        assert!(!is_resolution(None, &row("profit")));
    }

    #[test]
    fn trigger_payload_deserializes() {
        let payload = r#"{
            "op": "UPDATE",
            "before": {
                "id": 12, "asset": "EUR/USD", "direction": "up",
                "timeframe_minutes": 5, "status": "pending", "is_free": true,
                "created_at": "2024-06-01T12:00:00+00:00", "expires_at": null
            },
            "after": {
                "id": 12, "asset": "EUR/USD", "direction": "up",
                "timeframe_minutes": 5, "status": "profit", "is_free": true,
                "created_at": "2024-06-01T12:00:00+00:00", "expires_at": null
            }
        }"#;

        let event: SignalEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.op, ChangeOp::Update);
        assert!(is_resolution(event.before.as_ref(), &event.after));
    }

    #[test]
    fn insert_payload_has_no_prior_row() {
        let payload = r#"{
            "op": "INSERT",
            "before": null,
            "after": {
                "id": 13, "asset": "GBP/JPY", "direction": "down",
                "timeframe_minutes": 15, "status": "pending", "is_free": false,
                "created_at": null, "expires_at": null
            }
        }"#;

        let event: SignalEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.op, ChangeOp::Insert);
        assert!(event.before.is_none());
    }
}
