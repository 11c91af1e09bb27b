//! The bot: registries, collaborators and limits, built once at startup.

use crate::config::Config;
use crate::handlers::core::{CommandEntry, Registry};
use crate::i18n::{Catalog, Localizer};
use crate::response::Formatter;
use crate::settings::{GuildSettings, SettingEntry};
use crate::state::{
    GameActuator, GameStateStore, LockCoordinator, LockStore, MemoryGameStore, MemoryLockStore,
    MemorySettingsStore, MemoryUsernameCache, NoopActuator, SettingsStore, UsernameCache,
};
use crate::stats::{MemoryStats, StatsStore};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External collaborators the bot talks to through narrow interfaces.
#[derive(Clone)]
pub struct BotServices {
    pub games: Arc<dyn GameStateStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub usernames: Arc<dyn UsernameCache>,
    pub stats: Arc<dyn StatsStore>,
    pub actuator: Arc<dyn GameActuator>,
    pub localizer: Arc<dyn Localizer>,
    pub locks: Arc<dyn LockStore>,
}

impl BotServices {
    /// In-memory collaborators; `defaults` seeds guilds with no saved settings.
    pub fn in_memory(defaults: GuildSettings) -> Self {
        Self {
            games: Arc::new(MemoryGameStore::new()),
            settings: Arc::new(MemorySettingsStore::new(defaults)),
            usernames: Arc::new(MemoryUsernameCache::new()),
            stats: Arc::new(MemoryStats::new()),
            actuator: Arc::new(NoopActuator),
            localizer: Arc::new(Catalog::empty()),
            locks: Arc::new(MemoryLockStore::new()),
        }
    }

    pub fn with_stats(mut self, stats: Arc<dyn StatsStore>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_actuator(mut self, actuator: Arc<dyn GameActuator>) -> Self {
        self.actuator = actuator;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }
}

/// Process-wide bot state. Immutable after construction; share it by reference.
pub struct Bot {
    config: Config,
    commands: Registry<CommandEntry>,
    settings: Registry<SettingEntry>,
    locks: LockCoordinator,
    services: BotServices,
    formatter: Formatter,
    started_at: Instant,
}

impl Bot {
    pub fn new(config: Config, services: BotServices) -> Self {
        let commands = Registry::build("commands", crate::handlers::all_commands());
        let settings = Registry::build("settings", crate::settings::all_settings());
        let locks = LockCoordinator::new(services.locks.clone(), config.limits.lock_ttl());
        let formatter = Formatter::new(config.limits.max_chunk_bytes);

        tracing::info!(
            commands = commands.len(),
            settings = settings.len(),
            "Registries built"
        );

        Self {
            config,
            commands,
            settings,
            locks,
            services,
            formatter,
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn commands(&self) -> &Registry<CommandEntry> {
        &self.commands
    }

    pub fn settings(&self) -> &Registry<SettingEntry> {
        &self.settings
    }

    pub fn locks(&self) -> &LockCoordinator {
        &self.locks
    }

    pub fn services(&self) -> &BotServices {
        &self.services
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.services.localizer.as_ref()
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Settings for a guild that has never saved any.
    pub fn default_settings(&self) -> GuildSettings {
        GuildSettings::with_defaults(
            &self.config.bot.default_prefix,
            &self.config.bot.default_language,
        )
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
