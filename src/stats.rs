//! Game statistics and premium status.
//!
//! Stats are stored counts only; nothing here computes analytics. The SQLite
//! implementation lives in [`crate::db`]; [`MemoryStats`] serves tests and
//! deployments without a database.

use crate::state::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumTier {
    #[default]
    Free,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Selfhost,
}

impl PremiumTier {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Free => 0,
            Self::Bronze => 1,
            Self::Silver => 2,
            Self::Gold => 3,
            Self::Platinum => 4,
            Self::Selfhost => 5,
        }
    }

    pub fn from_i64(n: i64) -> Self {
        match n {
            1 => Self::Bronze,
            2 => Self::Silver,
            3 => Self::Gold,
            4 => Self::Platinum,
            5 => Self::Selfhost,
            _ => Self::Free,
        }
    }
}

/// A guild's premium tier and when it lapses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PremiumStatus {
    pub tier: PremiumTier,
    /// `None` never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl PremiumStatus {
    pub fn new(tier: PremiumTier, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { tier, expires_at }
    }

    /// Premium features are unlocked: a paid tier that has not lapsed.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.tier != PremiumTier::Free && self.expires_at.is_none_or(|t| t > now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Crewmate,
    Impostor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crewmate => "crewmate",
            Self::Impostor => "impostor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "crewmate" => Some(Self::Crewmate),
            "impostor" => Some(Self::Impostor),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player's participation in a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub user_id: String,
    pub name: String,
    pub role: Role,
    pub won: bool,
}

/// A finished game, as handed to [`StatsStore::record_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub guild_id: String,
    pub connect_code: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub winner: Role,
    pub players: Vec<GamePlayer>,
}

/// A stored game, addressed by `CONNECTCODE:game_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub game_id: i64,
    pub connect_code: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub winner: Role,
    pub players: Vec<GamePlayer>,
}

impl GameStats {
    pub fn match_id(&self) -> String {
        format!("{}:{}", self.connect_code, self.game_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub games: u64,
    pub wins: u64,
    pub crewmate_games: u64,
    pub impostor_games: u64,
}

impl UserStats {
    pub fn losses(&self) -> u64 {
        self.games.saturating_sub(self.wins)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildStats {
    pub games: u64,
    pub crewmate_wins: u64,
    pub impostor_wins: u64,
    pub players: u64,
}

// ============================================================================
// Store
// ============================================================================

#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn premium_status(&self, guild_id: &str) -> Result<PremiumStatus, StoreError>;

    async fn set_premium_status(
        &self,
        guild_id: &str,
        status: PremiumStatus,
    ) -> Result<(), StoreError>;

    async fn user_stats(&self, guild_id: &str, user_id: &str) -> Result<UserStats, StoreError>;

    async fn guild_stats(&self, guild_id: &str) -> Result<GuildStats, StoreError>;

    async fn game_stats(
        &self,
        guild_id: &str,
        connect_code: &str,
        game_id: i64,
    ) -> Result<Option<GameStats>, StoreError>;

    /// Store a finished game. Opted-out players are left out. Returns the game id.
    async fn record_game(&self, game: &GameRecord) -> Result<i64, StoreError>;

    /// Delete every game recorded in a guild. Returns how many were removed.
    async fn delete_guild_games(&self, guild_id: &str) -> Result<u64, StoreError>;

    /// Delete every game participation of a user, across guilds.
    async fn delete_user_games(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn is_opted_out(&self, user_id: &str) -> Result<bool, StoreError>;

    /// Returns whether the stored preference changed.
    async fn set_opt_out(&self, user_id: &str, opted_out: bool) -> Result<bool, StoreError>;
}

// ============================================================================
// In-memory implementation
// ============================================================================

#[derive(Debug, Clone)]
struct StoredGame {
    guild_id: String,
    stats: GameStats,
}

#[derive(Debug, Default)]
pub struct MemoryStats {
    premium: DashMap<String, PremiumStatus>,
    games: RwLock<Vec<StoredGame>>,
    opted_out: RwLock<HashSet<String>>,
    next_id: AtomicI64,
}

impl MemoryStats {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }
}

#[async_trait]
impl StatsStore for MemoryStats {
    async fn premium_status(&self, guild_id: &str) -> Result<PremiumStatus, StoreError> {
        Ok(self.premium.get(guild_id).map(|r| *r).unwrap_or_default())
    }

    async fn set_premium_status(
        &self,
        guild_id: &str,
        status: PremiumStatus,
    ) -> Result<(), StoreError> {
        self.premium.insert(guild_id.to_string(), status);
        Ok(())
    }

    async fn user_stats(&self, guild_id: &str, user_id: &str) -> Result<UserStats, StoreError> {
        let games = self.games.read();
        let mut stats = UserStats::default();
        for player in games
            .iter()
            .filter(|g| g.guild_id == guild_id)
            .flat_map(|g| g.stats.players.iter())
            .filter(|p| p.user_id == user_id)
        {
            stats.games += 1;
            stats.wins += u64::from(player.won);
            match player.role {
                Role::Crewmate => stats.crewmate_games += 1,
                Role::Impostor => stats.impostor_games += 1,
            }
        }
        Ok(stats)
    }

    async fn guild_stats(&self, guild_id: &str) -> Result<GuildStats, StoreError> {
        let games = self.games.read();
        let mut stats = GuildStats::default();
        let mut players = HashSet::new();
        for game in games.iter().filter(|g| g.guild_id == guild_id) {
            stats.games += 1;
            match game.stats.winner {
                Role::Crewmate => stats.crewmate_wins += 1,
                Role::Impostor => stats.impostor_wins += 1,
            }
            players.extend(game.stats.players.iter().map(|p| p.user_id.as_str()));
        }
        stats.players = players.len() as u64;
        Ok(stats)
    }

    async fn game_stats(
        &self,
        guild_id: &str,
        connect_code: &str,
        game_id: i64,
    ) -> Result<Option<GameStats>, StoreError> {
        Ok(self
            .games
            .read()
            .iter()
            .find(|g| {
                g.guild_id == guild_id
                    && g.stats.game_id == game_id
                    && g.stats.connect_code.eq_ignore_ascii_case(connect_code)
            })
            .map(|g| g.stats.clone()))
    }

    async fn record_game(&self, game: &GameRecord) -> Result<i64, StoreError> {
        let game_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let opted_out = self.opted_out.read();
        let players = game
            .players
            .iter()
            .filter(|p| !opted_out.contains(&p.user_id))
            .cloned()
            .collect();
        self.games.write().push(StoredGame {
            guild_id: game.guild_id.clone(),
            stats: GameStats {
                game_id,
                connect_code: game.connect_code.clone(),
                started_at: game.started_at,
                ended_at: game.ended_at,
                winner: game.winner,
                players,
            },
        });
        Ok(game_id)
    }

    async fn delete_guild_games(&self, guild_id: &str) -> Result<u64, StoreError> {
        let mut games = self.games.write();
        let before = games.len();
        games.retain(|g| g.guild_id != guild_id);
        Ok((before - games.len()) as u64)
    }

    async fn delete_user_games(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut removed = 0;
        for game in self.games.write().iter_mut() {
            let before = game.stats.players.len();
            game.stats.players.retain(|p| p.user_id != user_id);
            removed += (before - game.stats.players.len()) as u64;
        }
        Ok(removed)
    }

    async fn is_opted_out(&self, user_id: &str) -> Result<bool, StoreError> {
        Ok(self.opted_out.read().contains(user_id))
    }

    async fn set_opt_out(&self, user_id: &str, opted_out: bool) -> Result<bool, StoreError> {
        let mut set = self.opted_out.write();
        Ok(if opted_out {
            set.insert(user_id.to_string())
        } else {
            set.remove(user_id)
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;

    pub(crate) fn sample_game(guild: &str, code: &str) -> GameRecord {
        let start = Utc::now() - Duration::minutes(12);
        GameRecord {
            guild_id: guild.to_string(),
            connect_code: code.to_string(),
            started_at: start,
            ended_at: start + Duration::minutes(11),
            winner: Role::Impostor,
            players: vec![
                GamePlayer {
                    user_id: "u1".into(),
                    name: "Soup".into(),
                    role: Role::Impostor,
                    won: true,
                },
                GamePlayer {
                    user_id: "u2".into(),
                    name: "Bob".into(),
                    role: Role::Crewmate,
                    won: false,
                },
            ],
        }
    }

    #[test]
    fn test_premium_status_activity() {
        let now = Utc::now();
        assert!(!PremiumStatus::default().is_active(now));
        assert!(PremiumStatus::new(PremiumTier::Gold, None).is_active(now));
        let lapsed = PremiumStatus::new(PremiumTier::Gold, Some(now - Duration::days(1)));
        assert!(!lapsed.is_active(now));
        let current = PremiumStatus::new(PremiumTier::Bronze, Some(now + Duration::days(1)));
        assert!(current.is_active(now));
    }

    #[tokio::test]
    async fn test_memory_stats_counts() {
        let stats = MemoryStats::new();
        let id = stats.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        stats.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        stats.record_game(&sample_game("h", "ZZZZZZ")).await.unwrap();

        let user = stats.user_stats("g", "u1").await.unwrap();
        assert_eq!(user.games, 2);
        assert_eq!(user.wins, 2);
        assert_eq!(user.impostor_games, 2);
        assert_eq!(user.losses(), 0);

        let guild = stats.guild_stats("g").await.unwrap();
        assert_eq!(guild.games, 2);
        assert_eq!(guild.impostor_wins, 2);
        assert_eq!(guild.players, 2);

        let game = stats.game_stats("g", "abcdef", id).await.unwrap().unwrap();
        assert_eq!(game.match_id(), format!("ABCDEF:{id}"));
        assert!(stats.game_stats("h", "ABCDEF", id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_stats_deletes() {
        let stats = MemoryStats::new();
        stats.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        stats.record_game(&sample_game("h", "ABCDEF")).await.unwrap();

        assert_eq!(stats.delete_user_games("u2").await.unwrap(), 2);
        assert_eq!(stats.user_stats("g", "u2").await.unwrap().games, 0);
        assert_eq!(stats.delete_guild_games("g").await.unwrap(), 1);
        assert_eq!(stats.guild_stats("g").await.unwrap().games, 0);
        assert_eq!(stats.guild_stats("h").await.unwrap().games, 1);
    }

    #[tokio::test]
    async fn test_opted_out_players_are_not_recorded() {
        let stats = MemoryStats::new();
        assert!(stats.set_opt_out("u2", true).await.unwrap());
        assert!(!stats.set_opt_out("u2", true).await.unwrap());
        stats.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        assert_eq!(stats.user_stats("g", "u2").await.unwrap().games, 0);
        assert!(stats.set_opt_out("u2", false).await.unwrap());
        assert!(!stats.is_opted_out("u2").await.unwrap());
    }
}
