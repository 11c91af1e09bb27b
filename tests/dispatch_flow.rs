//! End-to-end dispatch: prefix handling, resolution, gating and replies.

mod common;

use common::{CHANNEL, TestBot, card, field, text};
use mutebot::state::ActuatorEvent;
use mutebot::{Caller, Content};

#[tokio::test]
async fn test_unprefixed_message_is_ignored() {
    let t = TestBot::new();
    assert!(t.member("hello there").await.is_empty());
    assert!(t.member(".a help").await.is_empty());
}

#[tokio::test]
async fn test_bare_prefix_shows_help() {
    let t = TestBot::new();
    let units = t.member(".au").await;
    let help = card(&units);
    assert_eq!(help.title, "MuteBot Bot Commands:");
    assert_eq!(units[0].channel_id, CHANNEL);
}

#[tokio::test]
async fn test_prefix_and_command_are_case_insensitive() {
    let t = TestBot::new();
    let units = t.member(".AU H").await;
    assert_eq!(card(&units).title, "MuteBot Bot Commands:");

    let units = t.member(".au HELP map").await;
    assert_eq!(card(&units).title, "🗺 map");
}

#[tokio::test]
async fn test_unknown_command_replies_with_hint() {
    let t = TestBot::new();
    let units = t.member(".au frobnicate").await;
    assert_eq!(
        text(&units),
        "I didn't recognize that command! View `.au help` for all available commands!"
    );
}

#[tokio::test]
async fn test_help_hides_secret_commands() {
    let t = TestBot::new();
    let units = t.admin(".au help").await;
    let help = card(&units);
    assert!(field(help, "🛠 settings").is_some());
    assert!(field(help, "🔗 link").is_some());
    for secret in ["ascii", "debugstate", "📢 force"] {
        assert!(field(help, secret).is_none(), "{secret} listed");
    }

    // Secret commands still run.
    let units = t.member(".au ascii").await;
    assert!(text(&units).starts_with("```"));
}

#[tokio::test]
async fn test_help_lists_only_permitted_commands() {
    let t = TestBot::new();
    t.admin(".au settings operatorRoles <@&55555>").await;

    let units = t.member(".au help").await;
    let help = card(&units);
    assert!(field(help, "🗺 map").is_some());
    assert!(field(help, "🔗 link").is_none());
    assert!(field(help, "🛠 settings").is_none());

    let operator = Caller::new("300003").with_roles(["55555"]);
    let units = t.send(operator, ".au help").await;
    let help = card(&units);
    assert!(field(help, "🔗 link").is_some());
    assert!(field(help, "🛠 settings").is_none());
}

#[tokio::test]
async fn test_admin_command_denied_for_member() {
    let t = TestBot::new();
    let units = t.member(".au settings").await;
    assert_eq!(
        text(&units),
        "You don't have permission to do that! It requires admin access."
    );
}

#[tokio::test]
async fn test_game_lifecycle() {
    let t = TestBot::new();

    let units = t.member(".au new").await;
    let created = card(&units);
    let code = field(created, "Connect Code")
        .map(|f| f.value.trim_matches('`').to_string())
        .unwrap_or_default();
    assert_eq!(code.len(), 8);

    assert!(t.member(".au link <@300003> red").await.is_empty());
    assert!(t.member(".au link 400004 Soup Dragon").await.is_empty());
    assert!(t.member(".au unlink <@300003>").await.is_empty());
    assert!(t.member(".au end").await.is_empty());

    let events = t.actuator.events();
    assert_eq!(
        events.first(),
        Some(&ActuatorEvent::PublishStatus {
            connect_code: code.clone(),
            running: true,
            links: 0,
        })
    );
    assert!(events.contains(&ActuatorEvent::PublishStatus {
        connect_code: code.clone(),
        running: true,
        links: 2,
    }));
    assert_eq!(
        &events[events.len() - 2..],
        &[
            ActuatorEvent::EndGame {
                connect_code: code.clone()
            },
            ActuatorEvent::ApplyToAll {
                connect_code: code,
                mute: false,
                deaf: false,
            },
        ]
    );

    let units = t.member(".au pause").await;
    assert_eq!(
        text(&units),
        "There is no game in this channel! Type `.au new` to start one."
    );
}

#[tokio::test]
async fn test_link_usage_and_bad_mention() {
    let t = TestBot::new();
    t.member(".au new").await;

    let units = t.member(".au link <@300003>").await;
    assert_eq!(card(&units).title, "🔗 link");

    let units = t.member(".au link someone red").await;
    assert!(text(&units).contains("someone"));
}

#[tokio::test]
async fn test_link_by_name_fills_cache() {
    let t = TestBot::new();
    t.member(".au new").await;
    t.member(".au link <@300003> Soup").await;

    let units = t.member(".au cache <@300003>").await;
    assert!(text(&units).contains("Soup"));

    let units = t.member(".au cache <@300003> clear").await;
    assert!(!text(&units).contains("Soup"));
    let units = t.member(".au cache <@300003>").await;
    assert!(!text(&units).contains("Soup"));
}

#[tokio::test]
async fn test_debugstate_is_chunked_json() {
    let mut config = mutebot::config::Config::default();
    config.limits.max_chunk_bytes = 64;
    let t = TestBot::with_config(config);

    let units = t.member(".au debugstate").await;
    assert_eq!(units.len(), 1);

    t.member(".au new").await;
    let units = t.member(".au debugstate").await;
    assert!(units.len() > 1);

    let mut json = String::new();
    for unit in &units {
        let Content::Text { text } = &unit.content else {
            panic!("expected text units");
        };
        let body = text
            .strip_prefix("```JSON\n")
            .and_then(|b| b.strip_suffix("\n```"))
            .unwrap_or_else(|| panic!("bad envelope: {text}"));
        json.push_str(body);
    }
    let state: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(state["running"], true);
    assert_eq!(state["key"]["channel_id"], CHANNEL);
}
