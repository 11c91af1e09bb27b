//! Argument parsing shared by commands and settings.

use regex::Regex;
use std::sync::LazyLock;

/// The literal trailing token that confirms a destructive operation.
pub const CONFIRM_TOKEN: &str = "confirm";

static USER_MENTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^<@!?(\d+)>$|^(\d{5,})$").ok());
static ROLE_MENTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^<@&(\d+)>$|^(\d{5,})$").ok());
static CHANNEL_MENTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^<#(\d+)>$|^(\d{5,})$").ok());

fn capture_id(re: &LazyLock<Option<Regex>>, token: &str) -> Option<String> {
    let caps = re.as_ref()?.captures(token.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Extract a user ID from `<@id>`, `<@!id>` or a bare numeric ID.
pub fn user_id(token: &str) -> Option<String> {
    capture_id(&USER_MENTION, token)
}

/// Extract a role ID from `<@&id>` or a bare numeric ID.
pub fn role_id(token: &str) -> Option<String> {
    capture_id(&ROLE_MENTION, token)
}

/// Extract a channel ID from `<#id>` or a bare numeric ID.
pub fn channel_id(token: &str) -> Option<String> {
    capture_id(&CHANNEL_MENTION, token)
}

/// Parse a permissive boolean.
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Whether the last token is the confirmation keyword.
pub fn is_confirmed(args: &[String]) -> bool {
    args.last()
        .is_some_and(|t| t.eq_ignore_ascii_case(CONFIRM_TOKEN))
}

/// Split a trailing qualifier off the primary argument.
///
/// If the last token exactly matches one of `qualifiers` and at least one
/// other token precedes it, it is consumed and returned; the rest are
/// joined with single spaces. Otherwise every token belongs to the primary
/// argument and the qualifier is `None`.
pub fn split_trailing_qualifier<'q>(
    args: &[String],
    qualifiers: &[&'q str],
) -> (String, Option<&'q str>) {
    if let [rest @ .., last] = args
        && !rest.is_empty()
        && let Some(q) = qualifiers.iter().find(|q| last == *q)
    {
        return (rest.join(" "), Some(*q));
    }
    (args.join(" "), None)
}

/// Split message content into whitespace-separated tokens.
pub fn tokenize(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        tokenize(s)
    }

    #[test]
    fn test_trailing_qualifier_consumed() {
        let (primary, q) =
            split_trailing_qualifier(&toks("the skeld detailed"), &["simple", "detailed"]);
        assert_eq!(primary, "the skeld");
        assert_eq!(q, Some("detailed"));
    }

    #[test]
    fn test_trailing_qualifier_is_case_sensitive() {
        let (primary, q) = split_trailing_qualifier(&toks("polus Simple"), &["simple", "detailed"]);
        assert_eq!(primary, "polus Simple");
        assert_eq!(q, None);
    }

    #[test]
    fn test_trailing_qualifier_absent() {
        let (primary, q) = split_trailing_qualifier(&toks("mira hq"), &["simple", "detailed"]);
        assert_eq!(primary, "mira hq");
        assert_eq!(q, None);
    }

    #[test]
    fn test_lone_qualifier_is_primary() {
        let (primary, q) = split_trailing_qualifier(&toks("Simple"), &["simple", "detailed"]);
        assert_eq!(primary, "Simple");
        assert_eq!(q, None);
    }

    #[test]
    fn test_mentions() {
        assert_eq!(user_id("<@123>").as_deref(), Some("123"));
        assert_eq!(user_id("<@!123>").as_deref(), Some("123"));
        assert_eq!(user_id("140581066283941888").as_deref(), Some("140581066283941888"));
        assert_eq!(user_id("bob"), None);
        assert_eq!(user_id("<@&123>"), None);
        assert_eq!(role_id("<@&77>").as_deref(), Some("77"));
        assert_eq!(channel_id("<#55>").as_deref(), Some("55"));
        assert_eq!(channel_id("#general"), None);
    }

    #[test]
    fn test_parse_bool() {
        for t in ["true", "T", "yes", "Y", "on", "1"] {
            assert_eq!(parse_bool(t), Some(true), "{t}");
        }
        for t in ["false", "f", "NO", "n", "off", "0"] {
            assert_eq!(parse_bool(t), Some(false), "{t}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_confirmation() {
        assert!(is_confirmed(&toks("reset confirm")));
        assert!(is_confirmed(&toks("reset CONFIRM")));
        assert!(!is_confirmed(&toks("reset")));
        assert!(!is_confirmed(&toks("reset confirmed")));
        assert!(!is_confirmed(&[]));
    }
}
