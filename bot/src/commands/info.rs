use teloxide::types::ChatId;

use crate::formatters;
use crate::keyboards;
use crate::notifier::Notifier;
use crate::state::AppState;

pub async fn send_plan(notifier: &Notifier, chat: ChatId) {
    notifier
        .send(
            chat,
            formatters::PLAN_TEXT,
            Some(keyboards::contact_keyboard().into()),
        )
        .await;
}

pub async fn send_contact(notifier: &Notifier, chat: ChatId) {
    notifier
        .send(
            chat,
            formatters::CONTACT_TEXT,
            Some(keyboards::contact_keyboard().into()),
        )
        .await;
}

pub async fn send_webapp(notifier: &Notifier, chat: ChatId, state: &AppState) {
    notifier
        .send(
            chat,
            formatters::WEBAPP_PROMPT,
            Some(keyboards::webapp_keyboard(&state.config.webapp_url).into()),
        )
        .await;
}
