//! Pure reply formatters. Everything here is a function of its inputs so
//! the rendering rules can be tested without a bot or a store.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::entity::{signals, users};
use shared::{Direction, SignalStatus};

use crate::relay::SignalRow;
use crate::services::signal_service::RECENT_SIGNALS_LIMIT;

/// Renewal warning kicks in at this many remaining days.
pub const RENEWAL_WARNING_DAYS: i64 = 5;

pub const NO_ACTIVE_SIGNALS: &str = "😴 No active signals right now. Check back soon.";
pub const SIGNALS_UNAVAILABLE: &str =
    "⚠️ Could not load signals right now. Please try again in a moment.";
pub const STATUS_UNAVAILABLE: &str =
    "⚠️ Could not load your profile right now. Please try again in a moment.";
pub const NOT_REGISTERED: &str = "You are not registered yet. Send /start to begin.";
pub const REGISTRATION_FAILED: &str =
    "⚠️ Something went wrong while saving your profile. Please send /start again.";
pub const MENU_PROMPT: &str = "Choose an action from the menu below 👇";

pub const HELP_TEXT: &str = "❓ <b>Help</b>\n\n\
    📊 Signals — the five most recent signals\n\
    👤 My Status — your subscription state\n\
    💎 VIP Plan — what the paid tier includes\n\
    🚀 Open App — launch the web app\n\
    📞 Contact — reach the team\n\n\
    Commands: /start /help /version";

pub const CONTACT_TEXT: &str = "📞 <b>Contact</b>\n\n\
    Questions, feedback or payment issues — message our support account \
    and we will get back to you within a day.";

pub const PLAN_TEXT: &str = "💎 <b>VIP Plan</b>\n\n\
    • Every signal, including VIP-only ones\n\
    • Result notifications as signals resolve\n\
    • Priority support\n\n\
    Contact us to activate your subscription.";

pub const WEBAPP_PROMPT: &str = "🚀 Open the app for charts and full signal history:";

pub fn welcome(bot_name: &str) -> String {
    format!(
        "👋 Welcome to <b>{bot_name}</b>!\n\n\
         Fresh trading signals, right here in the chat. \
         Use the menu below to look around."
    )
}

fn direction_label(direction: &str) -> &'static str {
    match Direction::from_db(direction) {
        Some(Direction::Up) => "🟢⬆️ UP",
        Some(Direction::Down) => "🔴⬇️ DOWN",
        None => "❔",
    }
}

fn status_label(status: &str) -> &'static str {
    match SignalStatus::from_db(status) {
        Some(SignalStatus::Pending) => "⏳ pending",
        Some(SignalStatus::Profit) => "✅ profit",
        Some(SignalStatus::Loss) => "❌ loss",
        None => "❔",
    }
}

fn tier_label(is_free: bool) -> &'static str {
    if is_free {
        "🆓 FREE"
    } else {
        "💎 VIP"
    }
}

fn local_time(ts: Option<DateTime<Utc>>, tz: Tz) -> String {
    ts.map(|t| t.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Renders up to five most-recent signals. The caller passes them newest
/// first; anything beyond the display limit is dropped here as well.
pub fn signal_list(signals: &[signals::Model], tz: Tz) -> String {
    if signals.is_empty() {
        return NO_ACTIVE_SIGNALS.to_string();
    }

    let mut out = String::from("📊 <b>Latest signals</b>\n");
    for signal in signals.iter().take(RECENT_SIGNALS_LIMIT as usize) {
        out.push_str(&format!(
            "\n<b>{}</b> — {} | {}m | {} | {}\n🕐 {} → {}\n",
            signal.asset,
            direction_label(&signal.direction),
            signal.timeframe_minutes,
            status_label(&signal.status),
            tier_label(signal.is_free),
            local_time(signal.created_at, tz),
            local_time(signal.expires_at, tz),
        ));
    }
    out
}

/// Whole days until `expiry`, rounded up. Anything already past is 0.
pub fn days_remaining(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expiry - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds + 86_399) / 86_400
    }
}

pub fn user_status(user: Option<&users::Model>, now: DateTime<Utc>) -> String {
    let Some(user) = user else {
        return NOT_REGISTERED.to_string();
    };

    let name = user
        .first_name
        .as_deref()
        .or(user.username.as_deref())
        .unwrap_or("trader");

    if !user.is_vip {
        return format!(
            "👤 <b>{name}</b>\n🆓 Free tier\n\n\
             💎 Upgrade to VIP to unlock every signal."
        );
    }

    match user.vip_expires_at {
        Some(expires) => {
            let days = days_remaining(expires, now);
            let mut out = format!(
                "👤 <b>{name}</b>\n💎 VIP active — {days} day(s) remaining\n📅 Expires: {}",
                expires.format("%Y-%m-%d")
            );
            if days <= RENEWAL_WARNING_DAYS {
                out.push_str(
                    "\n\n⚠️ Your VIP access expires soon. Renew to keep receiving every signal.",
                );
            }
            out
        }
        None => format!("👤 <b>{name}</b>\n💎 VIP active"),
    }
}

pub fn new_signal_alert(signal: &SignalRow, tz: Tz) -> String {
    format!(
        "🚨 <b>New signal #{}</b>\n\n\
         <b>{}</b> — {}\n\
         Timeframe: {}m | {}\n\
         🕐 {} → {}",
        signal.id,
        signal.asset,
        direction_label(&signal.direction),
        signal.timeframe_minutes,
        tier_label(signal.is_free),
        local_time(signal.created_at, tz),
        local_time(signal.expires_at, tz),
    )
}

pub fn signal_result_alert(signal: &SignalRow) -> String {
    let headline = match SignalStatus::from_db(&signal.status) {
        Some(SignalStatus::Profit) => "✅ <b>Signal resolved: PROFIT</b>",
        Some(SignalStatus::Loss) => "❌ <b>Signal resolved: LOSS</b>",
        _ => "ℹ️ <b>Signal updated</b>",
    };

    format!(
        "{headline}\n\n<b>{}</b> — {} | {}m",
        signal.asset,
        direction_label(&signal.direction),
        signal.timeframe_minutes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn signal(id: i64, asset: &str, direction: &str, status: &str, created_offset: i64) -> signals::Model {
        let base = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        signals::Model {
            id,
            asset: asset.to_string(),
            direction: direction.to_string(),
            timeframe_minutes: 5,
            status: status.to_string(),
            is_free: id % 2 == 0,
            created_at: Some(base - Duration::minutes(created_offset)),
            expires_at: Some(base + Duration::minutes(5)),
        }
    }

    fn user(is_vip: bool, expires: Option<DateTime<Utc>>) -> users::Model {
        users::Model {
            id: 7,
            username: Some("sam".to_string()),
            first_name: Some("Sam".to_string()),
            is_vip,
            vip_expires_at: expires,
            created_at: None,
        }
    }

    #[test]
    fn empty_list_renders_empty_state_without_glyphs() {
        let out = signal_list(&[], chrono_tz::UTC);
        assert_eq!(out, NO_ACTIVE_SIGNALS);
        for glyph in ["🟢", "🔴", "⏳", "✅", "❌"] {
            assert!(!out.contains(glyph));
        }
    }

    #[test]
    fn list_caps_at_five_entries_in_given_order() {
        let signals: Vec<_> = (0..8)
            .map(|i| signal(i, &format!("PAIR{i}"), "up", "pending", i))
            .collect();

        let out = signal_list(&signals, chrono_tz::UTC);
        for i in 0..5 {
            assert!(out.contains(&format!("PAIR{i}")), "missing entry {i}");
        }
        for i in 5..8 {
            assert!(!out.contains(&format!("PAIR{i}")), "unexpected entry {i}");
        }
        // Newest (as passed in) stays first
        assert!(out.find("PAIR0").unwrap() < out.find("PAIR4").unwrap());
    }

    #[test]
    fn direction_and_status_render_distinct_glyphs() {
        let out = signal_list(
            &[
                signal(1, "EUR/USD", "up", "profit", 0),
                signal(2, "GBP/JPY", "down", "loss", 1),
                signal(3, "AUD/CAD", "up", "pending", 2),
            ],
            chrono_tz::UTC,
        );
        assert!(out.contains("🟢⬆️ UP"));
        assert!(out.contains("🔴⬇️ DOWN"));
        assert!(out.contains("✅ profit"));
        assert!(out.contains("❌ loss"));
        assert!(out.contains("⏳ pending"));
    }

    #[test]
    fn times_are_rendered_in_display_timezone() {
        let out = signal_list(
            &[signal(1, "EUR/USD", "up", "pending", 0)],
            chrono_tz::Europe::Berlin,
        );
        // 12:00 UTC is 14:00 in Berlin in June
        assert!(out.contains("2024-06-01 14:00"));
    }

    #[test]
    fn renewal_warning_only_near_expiry() {
        let now = Utc::now();

        let soon = user(true, Some(now + Duration::days(3)));
        let out = user_status(Some(&soon), now);
        assert!(out.contains("expires soon"));
        assert!(out.contains("3 day(s)"));

        let later = user(true, Some(now + Duration::days(10)));
        let out = user_status(Some(&later), now);
        assert!(!out.contains("expires soon"));
        assert!(out.contains("10 day(s)"));
    }

    #[test]
    fn days_remaining_rounds_up_and_floors_at_zero() {
        let now = Utc::now();
        assert_eq!(days_remaining(now + Duration::hours(1), now), 1);
        assert_eq!(days_remaining(now + Duration::hours(25), now), 2);
        assert_eq!(days_remaining(now - Duration::hours(1), now), 0);
    }

    #[test]
    fn missing_user_is_guided_back_to_start() {
        let out = user_status(None, Utc::now());
        assert!(out.contains("/start"));
    }

    #[test]
    fn free_user_gets_upsell_line() {
        let out = user_status(Some(&user(false, None)), Utc::now());
        assert!(out.contains("Upgrade to VIP"));
        assert!(!out.contains("day(s) remaining"));
    }
}
