use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, WebAppInfo,
};
use url::Url;

use crate::commands::{
    CallbackAction, BTN_CONTACT, BTN_HELP, BTN_MY_STATUS, BTN_OPEN_APP, BTN_SIGNALS, BTN_VIP_PLAN,
};

pub const SUPPORT_URL: &str = "https://t.me/signal_bot_support";

/// Persistent reply keyboard with the six menu actions.
pub fn main_menu() -> KeyboardMarkup {
    let rows = vec![
        vec![
            KeyboardButton::new(BTN_SIGNALS),
            KeyboardButton::new(BTN_MY_STATUS),
        ],
        vec![
            KeyboardButton::new(BTN_VIP_PLAN),
            KeyboardButton::new(BTN_OPEN_APP),
        ],
        vec![
            KeyboardButton::new(BTN_HELP),
            KeyboardButton::new(BTN_CONTACT),
        ],
    ];

    let mut markup = KeyboardMarkup::new(rows);
    markup.resize_keyboard = true;
    markup
}

pub fn signals_keyboard(webapp_url: &str) -> InlineKeyboardMarkup {
    let mut rows = vec![vec![InlineKeyboardButton::callback(
        "🔄 Refresh",
        CallbackAction::RefreshSignals.as_token(),
    )]];

    if let Ok(url) = Url::parse(webapp_url) {
        rows.push(vec![InlineKeyboardButton::web_app(
            "🚀 Open App",
            WebAppInfo { url },
        )]);
    }

    InlineKeyboardMarkup::new(rows)
}

pub fn status_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🔄 Refresh",
        CallbackAction::RefreshStatus.as_token(),
    )]])
}

/// Inline keyboard pointing at the support account, used by the VIP plan
/// and contact views.
pub fn contact_keyboard() -> InlineKeyboardMarkup {
    let mut rows = Vec::new();
    if let Ok(url) = Url::parse(SUPPORT_URL) {
        rows.push(vec![InlineKeyboardButton::url("📞 Contact us", url)]);
    }
    InlineKeyboardMarkup::new(rows)
}

pub fn webapp_keyboard(webapp_url: &str) -> InlineKeyboardMarkup {
    let mut rows = Vec::new();
    if let Ok(url) = Url::parse(webapp_url) {
        rows.push(vec![InlineKeyboardButton::web_app(
            "🚀 Launch",
            WebAppInfo { url },
        )]);
    }
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_lists_every_action_label() {
        let markup = main_menu();
        let labels: Vec<String> = markup
            .keyboard
            .iter()
            .flatten()
            .map(|b| b.text.clone())
            .collect();

        for label in [
            BTN_SIGNALS,
            BTN_MY_STATUS,
            BTN_VIP_PLAN,
            BTN_OPEN_APP,
            BTN_HELP,
            BTN_CONTACT,
        ] {
            assert!(labels.iter().any(|l| l == label), "missing {label}");
        }
        assert!(markup.resize_keyboard);
    }

    #[test]
    fn bad_webapp_url_yields_no_launch_button() {
        let markup = webapp_keyboard("not a url");
        assert!(markup.inline_keyboard.is_empty());
    }
}
