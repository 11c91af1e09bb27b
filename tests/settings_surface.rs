//! The `settings` command: listing, cards, changes, premium gating, reset.

mod common;

use chrono::{Duration, Utc};
use common::{GUILD, TestBot, card, field, text};
use mutebot::stats::{PremiumStatus, PremiumTier, StatsStore};

#[tokio::test]
async fn test_list_shows_every_setting() {
    let t = TestBot::new();
    let units = t.admin(".au settings").await;
    let list = card(&units);
    assert_eq!(list.fields.len(), 18);
    assert!(field(list, "commandPrefix").is_some());
    assert!(field(list, "💎 autoRefresh").is_some());
}

#[tokio::test]
async fn test_setting_card_by_alias() {
    let t = TestBot::new();
    let units = t.admin(".au settings PREF").await;
    let entry = card(&units);
    assert_eq!(entry.title, "commandPrefix");
    assert_eq!(entry.fields[0].value, ".au");
}

#[tokio::test]
async fn test_unknown_setting() {
    let t = TestBot::new();
    let units = t.admin(".au settings frobnicate").await;
    assert_eq!(
        text(&units),
        "Sorry, `frobnicate` is not a valid setting! Type `.au settings` to see them all."
    );
}

#[tokio::test]
async fn test_prefix_change_takes_effect() {
    let t = TestBot::new();
    let units = t.admin(".au settings prefix !mb").await;
    assert_eq!(text(&units), "Setting `commandPrefix` is now `!mb`");

    assert!(t.member(".au help").await.is_empty());
    let units = t.member("!MB help").await;
    assert_eq!(card(&units).title, "MuteBot Bot Commands:");

    let units = t.member("!mb nope").await;
    assert!(text(&units).contains("`!mb help`"));
}

#[tokio::test]
async fn test_invalid_value_keeps_settings() {
    let t = TestBot::new();
    let units = t.admin(".au settings unmuteDeadDuringTasks maybe").await;
    assert_eq!(text(&units), "Sorry, `maybe` is neither true nor false.");

    let units = t.admin(".au settings unmuteDeadDuringTasks").await;
    assert_eq!(card(&units).fields[0].value, "false");
}

#[tokio::test]
async fn test_premium_setting_requires_premium() {
    let t = TestBot::new();
    let units = t.admin(".au settings autoRefresh true").await;
    assert_eq!(
        text(&units),
        "Sorry, `autoRefresh` is a 💎 premium setting! Your guild needs premium to change it."
    );
    let units = t.admin(".au settings autoRefresh").await;
    assert_eq!(card(&units).fields[0].value, "false");

    // Lapsed premium is no premium.
    let lapsed = PremiumStatus::new(PremiumTier::Gold, Some(Utc::now() - Duration::days(1)));
    t.stats.set_premium_status(GUILD, lapsed).await.unwrap();
    let units = t.admin(".au settings autoRefresh true").await;
    assert!(text(&units).contains("premium"));

    let active = PremiumStatus::new(PremiumTier::Gold, Some(Utc::now() + Duration::days(30)));
    t.stats.set_premium_status(GUILD, active).await.unwrap();
    let units = t.admin(".au settings autoRefresh true").await;
    assert_eq!(text(&units), "Setting `autoRefresh` is now `true`");
}

#[tokio::test]
async fn test_show_renders_unset_as_null() {
    let t = TestBot::new();
    let units = t.admin(".au settings show").await;
    let shown = card(&units);
    assert_eq!(field(shown, "commandPrefix").map(|f| f.value.as_str()), Some(".au"));
    assert_eq!(field(shown, "adminUserIDs").map(|f| f.value.as_str()), Some("null"));
}

#[tokio::test]
async fn test_reset_needs_confirm() {
    let t = TestBot::new();
    t.admin(".au settings prefix !").await;

    let units = t.admin("!settings reset").await;
    assert!(text(&units).contains("`! settings reset confirm`"));
    assert!(t.member(".au help").await.is_empty());

    let units = t.admin("!settings reset CONFIRM").await;
    assert_eq!(text(&units), "Successfully reset all settings to their defaults!");
    assert!(!t.member(".au help").await.is_empty());
}

#[tokio::test]
async fn test_admin_user_ids_grant_admin() {
    let t = TestBot::new();
    assert!(text(&t.member(".au settings").await).contains("admin access"));

    t.admin(&format!(".au settings adminUserIDs <@{}>", common::MEMBER_ID))
        .await;
    let units = t.member(".au settings").await;
    assert_eq!(card(&units).fields.len(), 18);
}
