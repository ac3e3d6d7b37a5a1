use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;

use crate::formatters;
use crate::keyboards;
use crate::notifier::Notifier;
use crate::state::{AppState, HandlerResult};

pub mod admin;
pub mod info;
pub mod signals;
pub mod start;
pub mod status;

pub use admin::handle_version;
pub use start::handle_start;

/// ✅🤖 <b>SignalBot</b> — available commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Register and open the main menu.
    Start,
    /// Show what the bot can do.
    Help,
    /// What is the current version?
    Version,
}

pub const BTN_SIGNALS: &str = "📊 Signals";
pub const BTN_VIP_PLAN: &str = "💎 VIP Plan";
pub const BTN_MY_STATUS: &str = "👤 My Status";
pub const BTN_OPEN_APP: &str = "🚀 Open App";
pub const BTN_HELP: &str = "❓ Help";
pub const BTN_CONTACT: &str = "📞 Contact";

/// The reply-keyboard menu surface. Every label maps to exactly one
/// variant; anything else falls through to the menu re-display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    ViewSignals,
    VipPlan,
    MyStatus,
    OpenApp,
    Help,
    Contact,
}

impl MenuButton {
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            BTN_SIGNALS => Some(MenuButton::ViewSignals),
            BTN_VIP_PLAN => Some(MenuButton::VipPlan),
            BTN_MY_STATUS => Some(MenuButton::MyStatus),
            BTN_OPEN_APP => Some(MenuButton::OpenApp),
            BTN_HELP => Some(MenuButton::Help),
            BTN_CONTACT => Some(MenuButton::Contact),
            _ => None,
        }
    }
}

/// Inline-button tokens. Each token re-runs the same view as its menu
/// counterpart, so pressing refresh twice is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    RefreshSignals,
    RefreshStatus,
}

impl CallbackAction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "refresh_signals" => Some(CallbackAction::RefreshSignals),
            "refresh_status" => Some(CallbackAction::RefreshStatus),
            _ => None,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            CallbackAction::RefreshSignals => "refresh_signals",
            CallbackAction::RefreshStatus => "refresh_status",
        }
    }

    pub fn menu_equivalent(&self) -> MenuButton {
        match self {
            CallbackAction::RefreshSignals => MenuButton::ViewSignals,
            CallbackAction::RefreshStatus => MenuButton::MyStatus,
        }
    }
}

pub async fn handle_help(msg: Message, notifier: Notifier) -> Result<()> {
    notifier
        .send(
            msg.chat.id,
            formatters::HELP_TEXT,
            Some(keyboards::main_menu().into()),
        )
        .await;
    Ok(())
}

/// Endpoint for every non-command text message: dispatch menu buttons, and
/// re-display the menu for anything unrecognized instead of erroring.
pub async fn handle_menu_text(
    msg: Message,
    state: Arc<AppState>,
    notifier: Notifier,
) -> HandlerResult {
    let button = msg.text().and_then(MenuButton::from_label);

    match button {
        Some(MenuButton::ViewSignals) => {
            let (text, markup) = signals::signals_view(&state).await;
            notifier.send(msg.chat.id, &text, Some(markup)).await;
        }
        Some(MenuButton::MyStatus) => {
            let user_id = msg.from.as_ref().map(|f| f.id.0 as i64).unwrap_or(0);
            let (text, markup) = status::status_view(&state, user_id).await;
            notifier.send(msg.chat.id, &text, Some(markup)).await;
        }
        Some(MenuButton::VipPlan) => info::send_plan(&notifier, msg.chat.id).await,
        Some(MenuButton::OpenApp) => info::send_webapp(&notifier, msg.chat.id, &state).await,
        Some(MenuButton::Contact) => info::send_contact(&notifier, msg.chat.id).await,
        Some(MenuButton::Help) => {
            notifier
                .send(
                    msg.chat.id,
                    formatters::HELP_TEXT,
                    Some(keyboards::main_menu().into()),
                )
                .await;
        }
        None => {
            notifier
                .send(
                    msg.chat.id,
                    formatters::MENU_PROMPT,
                    Some(keyboards::main_menu().into()),
                )
                .await;
        }
    }

    Ok(())
}

/// Endpoint for inline-button presses. Tokens route into the same views as
/// their text counterparts; unknown tokens are acknowledged and dropped.
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
    notifier: Notifier,
) -> HandlerResult {
    let action = q.data.as_deref().and_then(CallbackAction::from_token);
    bot.answer_callback_query(q.id).await?;

    let chat = q
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(q.from.id.0 as i64));

    // Tokens share the rendering path with their menu counterparts, so a
    // refresh press produces exactly what the text trigger would.
    match action.map(|a| a.menu_equivalent()) {
        Some(MenuButton::ViewSignals) => {
            let (text, markup) = signals::signals_view(&state).await;
            notifier.send(chat, &text, Some(markup)).await;
        }
        Some(MenuButton::MyStatus) => {
            let (text, markup) = status::status_view(&state, q.from.id.0 as i64).await;
            notifier.send(chat, &text, Some(markup)).await;
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_label_parses_to_its_button() {
        let cases = [
            (BTN_SIGNALS, MenuButton::ViewSignals),
            (BTN_VIP_PLAN, MenuButton::VipPlan),
            (BTN_MY_STATUS, MenuButton::MyStatus),
            (BTN_OPEN_APP, MenuButton::OpenApp),
            (BTN_HELP, MenuButton::Help),
            (BTN_CONTACT, MenuButton::Contact),
        ];
        for (label, expected) in cases {
            assert_eq!(MenuButton::from_label(label), Some(expected));
        }
        assert_eq!(MenuButton::from_label("free money"), None);
    }

    #[test]
    fn callback_tokens_round_trip_and_mirror_menu_buttons() {
        for action in [CallbackAction::RefreshSignals, CallbackAction::RefreshStatus] {
            assert_eq!(CallbackAction::from_token(action.as_token()), Some(action));
        }
        assert_eq!(
            CallbackAction::RefreshSignals.menu_equivalent(),
            MenuButton::ViewSignals
        );
        assert_eq!(
            CallbackAction::RefreshStatus.menu_equivalent(),
            MenuButton::MyStatus
        );
        assert_eq!(CallbackAction::from_token("refresh_everything"), None);
    }
}
