use teloxide::prelude::*;

use crate::notifier::Notifier;
use crate::state::HandlerResult;

/// Handler for the /version command. The build metadata is embedded at
/// compile time by build.rs; "unknown" means a build outside git.
pub async fn handle_version(msg: Message, notifier: Notifier) -> HandlerResult {
    let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
    let git_branch = option_env!("GIT_BRANCH").unwrap_or("unknown");

    let build_time_raw = option_env!("BUILD_TIME").unwrap_or("unknown");
    let build_time_human = if let Ok(epoch) = build_time_raw.parse::<u64>() {
        use chrono::{TimeZone, Utc};
        match Utc.timestamp_opt(epoch as i64, 0).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => build_time_raw.to_string(),
        }
    } else {
        build_time_raw.to_string()
    };

    let version_info = format!(
        "🤖 <b>Bot Version</b>\n\
        <b>Branch:</b> <code>{}</code>\n\
        <b>Commit:</b> <code>{}</code>\n\
        <b>Build Time:</b> <code>{}</code>\n\
        <b>OS:</b> <code>{}</code>",
        git_branch,
        git_hash,
        build_time_human,
        option_env!("CARGO_CFG_TARGET_OS").unwrap_or("unknown")
    );

    notifier.send(msg.chat.id, &version_info, None).await;

    Ok(())
}
