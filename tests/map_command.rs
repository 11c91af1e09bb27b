//! The `map` command and its name normalization.

mod common;

use common::{TestBot, text};
use mutebot::config::Config;

const BASE: &str = "https://github.com/automuteus/automuteus/blob/master/assets/maps/en";

#[tokio::test]
async fn test_skeld_spellings_agree() {
    let t = TestBot::new();
    let expected = format!("{BASE}/the_skeld.png");
    for input in ["skeld", "the skeld", "The_Skeld", "SKELD simple"] {
        let units = t.member(&format!(".au map {input}")).await;
        assert_eq!(text(&units), expected, "input {input}");
    }
}

#[tokio::test]
async fn test_trailing_detailed_qualifier() {
    let t = TestBot::new();
    let units = t.member(".au map mira hq detailed").await;
    assert_eq!(text(&units), format!("{BASE}/mira_hq_detailed.png"));

    // A lone qualifier is the map name, not a qualifier.
    let units = t.member(".au map detailed").await;
    assert_eq!(text(&units), "I don't have a map by that name!");

    // Only the lowercase keywords are qualifiers.
    let units = t.member(".au map polus Detailed").await;
    assert_eq!(text(&units), "I don't have a map by that name!");
}

#[tokio::test]
async fn test_unknown_map_is_not_found() {
    let t = TestBot::new();
    let units = t.member(".au map moon").await;
    assert_eq!(text(&units), "I don't have a map by that name!");
}

#[tokio::test]
async fn test_stored_map_version_is_default() {
    let t = TestBot::new();
    t.admin(".au settings mapVersion detailed").await;

    let units = t.member(".au map polus").await;
    assert_eq!(text(&units), format!("{BASE}/polus_detailed.png"));
    let units = t.member(".au map polus simple").await;
    assert_eq!(text(&units), format!("{BASE}/polus.png"));
}

#[tokio::test]
async fn test_configured_base_url() {
    let mut config = Config::default();
    config.assets.map_base_url = "https://cdn.test/maps".to_string();
    let t = TestBot::with_config(config);

    let units = t.member(".au map airship").await;
    assert_eq!(text(&units), "https://cdn.test/maps/en/airship.png");
}
