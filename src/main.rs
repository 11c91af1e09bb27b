//! mutebot - command routing for a social-deduction game bot.
//!
//! Development transport: inbound messages as JSON lines on stdin, outbound
//! units as JSON lines on stdout. Logs go to stderr.

use mutebot::config::{Config, validate};
use mutebot::db::Database;
use mutebot::i18n::{Catalog, Localizer};
use mutebot::settings::GuildSettings;
use mutebot::stats::StatsStore;
use mutebot::{Bot, BotServices, gateway, http, metrics, telemetry};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let mut config = Config::load_or_default(&config_path)?;
    config.apply_env();

    telemetry::init_logging(config.logging.format);

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(path = %config_path, error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "{} configuration error(s) in {config_path}",
            errors.len()
        ));
    }

    info!(
        path = %config_path,
        bot = %config.bot.name,
        prefix = %config.bot.default_prefix,
        "Starting mutebot"
    );

    if let Some(port) = config.metrics.port {
        metrics::init();
        tokio::spawn(http::run_metrics_server(port));
        info!(port, "Metrics enabled");
    } else {
        info!("Metrics disabled");
    }

    let localizer: Arc<dyn Localizer> = match &config.locales.dir {
        Some(dir) => {
            let catalog = Catalog::load(dir)?;
            info!(dir = %dir.display(), languages = ?catalog.languages(), "Locales loaded");
            Arc::new(catalog)
        }
        None => Arc::new(Catalog::empty()),
    };

    let defaults =
        GuildSettings::with_defaults(&config.bot.default_prefix, &config.bot.default_language);
    let mut services = BotServices::in_memory(defaults).with_localizer(localizer);

    if let Some(db_config) = &config.database {
        let db = Database::new(&db_config.path).await?;
        let stats: Arc<dyn StatsStore> = Arc::new(db.stats());
        services = services.with_stats(stats);
    } else {
        info!("No database configured, stats are kept in memory");
    }

    let bot = Arc::new(Bot::new(config, services));
    gateway::run_stdio(bot).await?;

    info!("Input closed, shutting down");
    Ok(())
}
