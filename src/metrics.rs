//! Prometheus metrics collection for mutebot.
//!
//! Metrics are held in `OnceLock`s and only recorded after [`init`] has run;
//! before that every `record_*` helper is a no-op, so library users and tests
//! that never initialize metrics pay nothing.
//!
//! - `bot_command_total{command}` - Commands dispatched by canonical name
//! - `bot_command_duration_seconds{command}` - Dispatch latency histogram
//! - `bot_command_errors_total{command,kind}` - Failed dispatches by error kind
//! - `bot_lock_contended_total` - Session lock acquisitions that failed
//! - `bot_registry_conflicts_total{registry}` - Keys dropped at registry build

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

// ========================================================================
// Metrics
// ========================================================================

/// Commands dispatched.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Dispatch latency.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Dispatch failures.
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Contended session lock acquisitions.
pub static LOCK_CONTENDED: OnceLock<IntCounter> = OnceLock::new();

/// Registry keys rejected at build time.
pub static REGISTRY_CONFLICTS: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize the Prometheus metrics registry.
///
/// Idempotent. Call once at startup before dispatching.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            match $init {
                Ok(m) => {
                    if let Err(e) = r.register(Box::new(m.clone())) {
                        tracing::warn!(
                            error = %e,
                            concat!("Failed to register metric ", stringify!($metric))
                        );
                    }
                    let _ = $metric.set(m);
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        concat!("Failed to create metric ", stringify!($metric))
                    );
                }
            }
        };
    }

    if COMMAND_COUNTER.get().is_some() {
        return;
    }

    register!(
        COMMAND_COUNTER,
        IntCounterVec::new(
            Opts::new("bot_command_total", "Commands dispatched by name"),
            &["command"],
        )
    );
    register!(
        COMMAND_LATENCY,
        HistogramVec::new(
            HistogramOpts::new("bot_command_duration_seconds", "Command dispatch latency by name")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["command"],
        )
    );
    register!(
        COMMAND_ERRORS,
        IntCounterVec::new(
            Opts::new("bot_command_errors_total", "Command errors by name and kind"),
            &["command", "kind"],
        )
    );
    register!(
        LOCK_CONTENDED,
        IntCounter::new("bot_lock_contended_total", "Session lock acquisitions that failed")
    );
    register!(
        REGISTRY_CONFLICTS,
        IntCounterVec::new(
            Opts::new("bot_registry_conflicts_total", "Registry keys dropped at build"),
            &["registry"],
        )
    );
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Record a command execution with latency.
#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

/// Record a command error.
#[inline]
pub fn record_command_error(command: &str, kind: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, kind]).inc();
    }
}

#[inline]
pub fn record_lock_contention() {
    if let Some(c) = LOCK_CONTENDED.get() {
        c.inc();
    }
}

#[inline]
pub fn record_registry_conflicts(registry: &str, count: usize) {
    if count == 0 {
        return;
    }
    if let Some(c) = REGISTRY_CONFLICTS.get() {
        c.with_label_values(&[registry]).inc_by(count as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_lifecycle() {
        init();
        init();

        record_command("help", 0.002);
        record_command_error("stats", "permission_denied");
        record_lock_contention();
        record_registry_conflicts("commands", 2);
        record_registry_conflicts("settings", 0);

        let output = gather_metrics();
        assert!(output.contains("bot_command_total"));
        assert!(output.contains("command=\"help\""));
        assert!(output.contains("bot_command_errors_total"));
        assert!(output.contains("kind=\"permission_denied\""));
        assert!(output.contains("bot_lock_contended_total"));
        assert!(output.contains("registry=\"commands\""));
    }
}
