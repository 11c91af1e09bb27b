//! Stats repository: recorded games, privacy opt-outs and premium status.

use super::DbError;
use crate::state::StoreError;
use crate::stats::{
    GamePlayer, GameRecord, GameStats, GuildStats, PremiumStatus, PremiumTier, Role, StatsStore,
    UserStats,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn parse_role(s: &str) -> Result<Role, DbError> {
    Role::parse(s).ok_or_else(|| DbError::CorruptRow(format!("unknown role {s:?}")))
}

fn count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

/// Repository for game statistics.
#[derive(Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_premium(&self, guild_id: &str) -> Result<PremiumStatus, DbError> {
        let row = sqlx::query_as::<_, (i64, Option<i64>)>(
            "SELECT tier, expires_at FROM guild_premium WHERE guild_id = ?",
        )
        .bind(guild_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(|(tier, expires)| {
                PremiumStatus::new(PremiumTier::from_i64(tier), expires.map(from_unix))
            })
            .unwrap_or_default())
    }

    async fn store_premium(&self, guild_id: &str, status: PremiumStatus) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO guild_premium (guild_id, tier, expires_at)
            VALUES (?, ?, ?)
            ON CONFLICT(guild_id)
            DO UPDATE SET tier = excluded.tier, expires_at = excluded.expires_at
            "#,
        )
        .bind(guild_id)
        .bind(status.tier.as_i64())
        .bind(status.expires_at.map(|t| t.timestamp()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn fetch_user(&self, guild_id: &str, user_id: &str) -> Result<UserStats, DbError> {
        let (games, wins, crew, imp) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(p.won), 0),
                   COALESCE(SUM(p.role = 'crewmate'), 0),
                   COALESCE(SUM(p.role = 'impostor'), 0)
            FROM game_players p
            JOIN games g ON g.id = p.game_id
            WHERE g.guild_id = ? AND p.user_id = ?
            "#,
        )
        .bind(guild_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserStats {
            games: count(games),
            wins: count(wins),
            crewmate_games: count(crew),
            impostor_games: count(imp),
        })
    }

    async fn fetch_guild(&self, guild_id: &str) -> Result<GuildStats, DbError> {
        let (games, crew, imp) = sqlx::query_as::<_, (i64, i64, i64)>(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(winner = 'crewmate'), 0),
                   COALESCE(SUM(winner = 'impostor'), 0)
            FROM games
            WHERE guild_id = ?
            "#,
        )
        .bind(guild_id)
        .fetch_one(&self.pool)
        .await?;

        let players: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT p.user_id)
            FROM game_players p
            JOIN games g ON g.id = p.game_id
            WHERE g.guild_id = ?
            "#,
        )
        .bind(guild_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(GuildStats {
            games: count(games),
            crewmate_wins: count(crew),
            impostor_wins: count(imp),
            players: count(players),
        })
    }

    async fn fetch_game(
        &self,
        guild_id: &str,
        connect_code: &str,
        game_id: i64,
    ) -> Result<Option<GameStats>, DbError> {
        let row = sqlx::query_as::<_, (i64, String, i64, i64, String)>(
            r#"
            SELECT id, connect_code, started_at, ended_at, winner
            FROM games
            WHERE guild_id = ? AND id = ? AND connect_code = ? COLLATE NOCASE
            "#,
        )
        .bind(guild_id)
        .bind(game_id)
        .bind(connect_code)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, code, started, ended, winner)) = row else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, (String, String, String, bool)>(
            "SELECT user_id, player_name, role, won FROM game_players \
             WHERE game_id = ? ORDER BY rowid",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let players = rows
            .into_iter()
            .map(|(user_id, name, role, won)| {
                Ok(GamePlayer {
                    user_id,
                    name,
                    role: parse_role(&role)?,
                    won,
                })
            })
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(Some(GameStats {
            game_id: id,
            connect_code: code,
            started_at: from_unix(started),
            ended_at: from_unix(ended),
            winner: parse_role(&winner)?,
            players,
        }))
    }

    async fn insert_game(&self, game: &GameRecord) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let game_id = sqlx::query(
            r#"
            INSERT INTO games (guild_id, connect_code, started_at, ended_at, winner)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&game.guild_id)
        .bind(&game.connect_code)
        .bind(game.started_at.timestamp())
        .bind(game.ended_at.timestamp())
        .bind(game.winner.as_str())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for player in &game.players {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO game_players (game_id, user_id, player_name, role, won)
                SELECT ?, ?, ?, ?, ?
                WHERE NOT EXISTS (
                    SELECT 1 FROM user_privacy WHERE user_id = ? AND opted_out = 1
                )
                "#,
            )
            .bind(game_id)
            .bind(&player.user_id)
            .bind(&player.name)
            .bind(player.role.as_str())
            .bind(player.won)
            .bind(&player.user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(game_id)
    }

    async fn remove_guild_games(&self, guild_id: &str) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM game_players WHERE game_id IN (SELECT id FROM games WHERE guild_id = ?)",
        )
        .bind(guild_id)
        .execute(&mut *tx)
        .await?;

        let removed = sqlx::query("DELETE FROM games WHERE guild_id = ?")
            .bind(guild_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(removed)
    }

    async fn remove_user_games(&self, user_id: &str) -> Result<u64, DbError> {
        Ok(sqlx::query("DELETE FROM game_players WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    async fn fetch_opt_out(&self, user_id: &str) -> Result<bool, DbError> {
        let flag: Option<bool> =
            sqlx::query_scalar("SELECT opted_out FROM user_privacy WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(flag.unwrap_or(false))
    }

    async fn store_opt_out(&self, user_id: &str, opted_out: bool) -> Result<bool, DbError> {
        if self.fetch_opt_out(user_id).await? == opted_out {
            return Ok(false);
        }
        sqlx::query(
            r#"
            INSERT INTO user_privacy (user_id, opted_out) VALUES (?, ?)
            ON CONFLICT(user_id) DO UPDATE SET opted_out = excluded.opted_out
            "#,
        )
        .bind(user_id)
        .bind(opted_out)
        .execute(&self.pool)
        .await?;
        Ok(true)
    }
}

#[async_trait]
impl StatsStore for StatsRepository {
    async fn premium_status(&self, guild_id: &str) -> Result<PremiumStatus, StoreError> {
        Ok(self.fetch_premium(guild_id).await?)
    }

    async fn set_premium_status(
        &self,
        guild_id: &str,
        status: PremiumStatus,
    ) -> Result<(), StoreError> {
        Ok(self.store_premium(guild_id, status).await?)
    }

    async fn user_stats(&self, guild_id: &str, user_id: &str) -> Result<UserStats, StoreError> {
        Ok(self.fetch_user(guild_id, user_id).await?)
    }

    async fn guild_stats(&self, guild_id: &str) -> Result<GuildStats, StoreError> {
        Ok(self.fetch_guild(guild_id).await?)
    }

    async fn game_stats(
        &self,
        guild_id: &str,
        connect_code: &str,
        game_id: i64,
    ) -> Result<Option<GameStats>, StoreError> {
        Ok(self.fetch_game(guild_id, connect_code, game_id).await?)
    }

    async fn record_game(&self, game: &GameRecord) -> Result<i64, StoreError> {
        Ok(self.insert_game(game).await?)
    }

    async fn delete_guild_games(&self, guild_id: &str) -> Result<u64, StoreError> {
        Ok(self.remove_guild_games(guild_id).await?)
    }

    async fn delete_user_games(&self, user_id: &str) -> Result<u64, StoreError> {
        Ok(self.remove_user_games(user_id).await?)
    }

    async fn is_opted_out(&self, user_id: &str) -> Result<bool, StoreError> {
        Ok(self.fetch_opt_out(user_id).await?)
    }

    async fn set_opt_out(&self, user_id: &str, opted_out: bool) -> Result<bool, StoreError> {
        Ok(self.store_opt_out(user_id, opted_out).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::stats::tests::sample_game;
    use chrono::Duration;

    #[tokio::test]
    async fn test_record_and_query_game() {
        let db = Database::new(":memory:").await.unwrap();
        let repo = db.stats();

        let id = repo.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        let game = repo.game_stats("g", "abcdef", id).await.unwrap().unwrap();
        assert_eq!(game.winner, Role::Impostor);
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.players[0].name, "Soup");
        assert!(repo.game_stats("other", "ABCDEF", id).await.unwrap().is_none());

        let user = repo.user_stats("g", "u2").await.unwrap();
        assert_eq!(user.games, 1);
        assert_eq!(user.wins, 0);
        assert_eq!(user.crewmate_games, 1);

        let guild = repo.guild_stats("g").await.unwrap();
        assert_eq!(guild.games, 1);
        assert_eq!(guild.impostor_wins, 1);
        assert_eq!(guild.players, 2);
    }

    #[tokio::test]
    async fn test_deletes_and_opt_out() {
        let db = Database::new(":memory:").await.unwrap();
        let repo = db.stats();

        assert!(repo.set_opt_out("u1", true).await.unwrap());
        assert!(!repo.set_opt_out("u1", true).await.unwrap());
        let id = repo.record_game(&sample_game("g", "ABCDEF")).await.unwrap();
        let game = repo.game_stats("g", "ABCDEF", id).await.unwrap().unwrap();
        assert_eq!(game.players.len(), 1);

        assert_eq!(repo.delete_user_games("u2").await.unwrap(), 1);
        assert_eq!(repo.delete_guild_games("g").await.unwrap(), 1);
        assert_eq!(repo.guild_stats("g").await.unwrap().games, 0);
    }

    #[tokio::test]
    async fn test_premium_roundtrip() {
        let db = Database::new(":memory:").await.unwrap();
        let repo = db.stats();
        assert_eq!(repo.premium_status("g").await.unwrap(), PremiumStatus::default());

        let expires = from_unix((Utc::now() + Duration::days(30)).timestamp());
        let status = PremiumStatus::new(PremiumTier::Gold, Some(expires));
        repo.set_premium_status("g", status).await.unwrap();
        assert_eq!(repo.premium_status("g").await.unwrap(), status);
        assert!(status.is_active(Utc::now()));
    }
}
