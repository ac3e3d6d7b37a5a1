use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

mod commands;
mod formatters;
mod keyboards;
mod notifier;
mod relay;
mod repositories;
mod services;
mod state;

use crate::commands::{
    handle_callback, handle_help, handle_menu_text, handle_start, handle_version, Command,
};
use crate::notifier::Notifier;
use crate::state::AppState;
use shared::Config;

/// Delay between a failed session and its teardown.
const SESSION_STOP_DELAY: Duration = Duration::from_secs(5);
/// Fixed wait before the next full bootstrap attempt. Not a backoff.
const SESSION_RESTART_DELAY: Duration = Duration::from_secs(10);

fn schema() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(handle_start))
        .branch(case![Command::Help].endpoint(handle_help))
        .branch(case![Command::Version].endpoint(handle_version));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(handle_menu_text));

    let callback_query_handler = Update::filter_callback_query().endpoint(handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_query_handler)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting signal bot...");

    // Missing required configuration is fatal; everything past this point
    // is retried.
    let config = Config::from_env()?;

    loop {
        match run_bot(config.clone()).await {
            Ok(()) => break,
            Err(e) => {
                tracing::error!("Bot session ended with error: {e:#}");
                tokio::time::sleep(SESSION_STOP_DELAY).await;
                tracing::info!(
                    "Session stopped, restarting in {}s",
                    SESSION_RESTART_DELAY.as_secs()
                );
                tokio::time::sleep(SESSION_RESTART_DELAY).await;
            }
        }
    }

    Ok(())
}

/// One full bootstrap: state, transport verification, relay task,
/// dispatcher. Returns only when the dispatcher stops (ctrl-c) or a
/// startup step fails.
async fn run_bot(config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(config).await?);
    tracing::info!("AppState initialized");

    let bot = Bot::new(&state.config.bot_token);
    let me = bot.get_me().await?;
    tracing::info!("Authorized as @{}", me.username());

    let notifier = Notifier::new(bot.clone());

    let relay_task = tokio::spawn(relay::run(state.clone(), notifier.clone()));

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![state.clone(), notifier.clone()])
        .enable_ctrlc_handler()
        .build();

    tracing::info!("Bot is running and waiting for updates...");
    dispatcher.dispatch().await;

    relay_task.abort();
    Ok(())
}
