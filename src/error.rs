//! Unified error handling for mutebot.
//!
//! Every failure a command can hit is a [`BotError`]. Errors carry a static
//! metrics label and know how to turn themselves into a localized reply for
//! the channel the command was issued in.

use crate::handlers::core::Tier;
use crate::i18n::{CatalogError, Localizer, Msg, Notice, messages};
use crate::response::Payload;
use crate::state::{LockUnavailable, StoreError};
use thiserror::Error;

// ============================================================================
// Lookup kinds (NotFound)
// ============================================================================

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Command,
    Setting,
    Map,
    User,
    Match,
}

impl Lookup {
    fn message(self) -> Msg {
        match self {
            Self::Command => messages::COMMAND_NOT_FOUND,
            Self::Setting => messages::SETTING_NOT_FOUND,
            Self::Map => messages::MAP_NOT_FOUND,
            Self::User => messages::USER_NOT_FOUND,
            Self::Match => messages::MATCH_NOT_FOUND,
        }
    }
}

// ============================================================================
// Command errors
// ============================================================================

/// Errors that can occur while resolving or running a command.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("{kind:?} not found: {token}")]
    NotFound { kind: Lookup, token: String },

    #[error("permission denied (requires {required})")]
    PermissionDenied { required: Tier },

    #[error(transparent)]
    LockUnavailable(#[from] LockUnavailable),

    /// Malformed setting value or argument shape.
    #[error("invalid argument: {}", .0.msg.id)]
    Validation(Notice),

    #[error("external service error: {0}")]
    External(#[from] StoreError),

    /// Locale catalogs could not be reread.
    #[error("external service error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl BotError {
    pub fn not_found(kind: Lookup, token: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            token: token.into(),
        }
    }

    pub fn invalid(msg: Msg) -> Self {
        Self::Validation(Notice::new(msg))
    }

    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::LockUnavailable(_) => "lock_unavailable",
            Self::Validation(_) => "validation",
            Self::External(_) | Self::Catalog(_) => "external_service",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convert to a localized, user-visible reply.
    pub fn to_reply(&self, localizer: &dyn Localizer, language: &str, prefix: &str) -> Payload {
        let text = match self {
            Self::NotFound { kind, token } => Notice::new(kind.message())
                .arg("Token", token.as_str())
                .arg("CommandPrefix", prefix)
                .render(localizer, language),
            Self::PermissionDenied { required } => Notice::new(messages::PERMISSION_DENIED)
                .arg("Tier", required.to_string())
                .render(localizer, language),
            Self::LockUnavailable(_) => {
                Notice::new(messages::LOCK_UNAVAILABLE).render(localizer, language)
            }
            Self::Validation(notice) => notice
                .clone()
                .arg("CommandPrefix", prefix)
                .render(localizer, language),
            Self::External(e) => Notice::new(messages::EXTERNAL_FAILURE)
                .arg("Error", e.to_string())
                .render(localizer, language),
            Self::Catalog(e) => Notice::new(messages::EXTERNAL_FAILURE)
                .arg("Error", e.to_string())
                .render(localizer, language),
            Self::Internal(_) => {
                Notice::new(messages::INTERNAL_FAILURE).render(localizer, language)
            }
        };
        Payload::Text(text)
    }
}

/// Result type for command handlers.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::state::GameSessionKey;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BotError::not_found(Lookup::Command, "x").error_code(),
            "not_found"
        );
        assert_eq!(
            BotError::PermissionDenied {
                required: Tier::Admin
            }
            .error_code(),
            "permission_denied"
        );
        assert_eq!(BotError::Internal("x".into()).error_code(), "internal_error");
    }

    #[test]
    fn test_lock_unavailable_reply_is_visible() {
        let err = BotError::from(LockUnavailable {
            key: GameSessionKey::new("g", "c"),
        });
        let catalog = Catalog::empty();
        match err.to_reply(&catalog, "en", ".au") {
            Payload::Text(text) => assert_eq!(text, messages::LOCK_UNAVAILABLE.other),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_not_found_reply_mentions_prefix() {
        let err = BotError::not_found(Lookup::Command, "frobnicate");
        let catalog = Catalog::empty();
        let Payload::Text(text) = err.to_reply(&catalog, "en", "!mb") else {
            panic!("expected text");
        };
        assert!(text.contains("!mb help"));
    }
}
