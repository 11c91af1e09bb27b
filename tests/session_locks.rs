//! Session lock behavior as seen through dispatch.

mod common;

use common::{CHANNEL, GUILD, TestBot, card, text};
use mutebot::Caller;
use mutebot::state::GameSessionKey;
use std::sync::Arc;

const LOCKED: &str = "Could not obtain lock";

#[tokio::test]
async fn test_contended_lock_fails_fast() {
    let t = TestBot::new();
    t.member(".au new").await;

    let key = GameSessionKey::new(GUILD, CHANNEL);
    let held = t.bot.locks().try_acquire(&key).unwrap();

    assert_eq!(text(&t.member(".au link <@300003> red").await), LOCKED);
    assert_eq!(text(&t.member(".au pause").await), LOCKED);
    assert_eq!(text(&t.member(".au new").await), LOCKED);

    drop(held);
    assert!(t.member(".au link <@300003> red").await.is_empty());
}

#[tokio::test]
async fn test_short_arguments_answer_before_locking() {
    let t = TestBot::new();
    t.member(".au new").await;

    let key = GameSessionKey::new(GUILD, CHANNEL);
    let _held = t.bot.locks().try_acquire(&key).unwrap();

    assert_eq!(card(&t.member(".au link").await).title, "🔗 link");
    assert_eq!(card(&t.member(".au link <@300003>").await).title, "🔗 link");
    assert_eq!(card(&t.member(".au unlink").await).title, "🚷 unlink");
    assert_eq!(text(&t.member(".au unlink <@300003>").await), LOCKED);
}

#[tokio::test]
async fn test_shared_access_ignores_lock() {
    let t = TestBot::new();
    t.member(".au new").await;

    let key = GameSessionKey::new(GUILD, CHANNEL);
    let _held = t.bot.locks().try_acquire(&key).unwrap();

    assert!(t.member(".au unmuteall").await.is_empty());
    assert!(!t.member(".au debugstate").await.is_empty());
    assert_eq!(card(&t.member(".au info").await).title, "MuteBot Info");
}

#[tokio::test]
async fn test_lock_scoped_to_channel() {
    let t = TestBot::new();
    let key = GameSessionKey::new(GUILD, CHANNEL);
    let _held = t.bot.locks().try_acquire(&key).unwrap();

    let units = t.send_in("chan-2", Caller::new("200002"), ".au new").await;
    assert_eq!(units[0].channel_id, "chan-2");
    card(&units);
}

#[tokio::test]
async fn test_lock_released_after_error() {
    let t = TestBot::new();
    let units = t.member(".au pause").await;
    assert!(text(&units).starts_with("There is no game"));

    let key = GameSessionKey::new(GUILD, CHANNEL);
    assert!(t.bot.locks().try_acquire(&key).is_ok());
}

#[tokio::test]
async fn test_concurrent_links_never_lose_updates() {
    let t = Arc::new(TestBot::new());
    t.member(".au new").await;

    // Every contender either lands its link or is told the lock was busy.
    let mut tasks = Vec::new();
    for i in 0..16u32 {
        let t = Arc::clone(&t);
        tasks.push(tokio::spawn(async move {
            let user = 500_000 + i;
            let units = t.member(&format!(".au link <@{user}> Player{i}")).await;
            (user, units.is_empty())
        }));
    }

    let mut linked = Vec::new();
    for task in tasks {
        let (user, ok) = task.await.unwrap();
        if ok {
            linked.push(user.to_string());
        }
    }
    assert!(!linked.is_empty());

    let key = GameSessionKey::new(GUILD, CHANNEL);
    let state = t.bot.services().games.load(&key).await.unwrap().unwrap();
    let mut stored: Vec<String> = state.links.iter().map(|l| l.user_id.clone()).collect();
    stored.sort();
    linked.sort();
    assert_eq!(stored, linked);
}
