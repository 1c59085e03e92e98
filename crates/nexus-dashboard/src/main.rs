//! Headless runner for the Nexus Crisis Intelligence dashboard.
//!
//! Wires the event store, the presentation shell and the live feed
//! together, logging every map call and notification instead of drawing
//! them. Runs until Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `nexus-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the event store from sample data
//! 4. Create the shell, draw the base map and select the first event
//! 5. Spawn the live feed ticker
//! 6. Wait for Ctrl-C, then stop the ticker and log its totals

use std::path::Path;
use std::sync::Arc;

use nexus_core::config::{DashboardConfig, LoggingConfig};
use nexus_core::live::{self, LiveSinks};
use nexus_core::map::TracingSurface;
use nexus_core::notify::{Notifier, TracingAudio, TracingNotifier};
use nexus_core::store::EventStore;
use nexus_dashboard::{DashboardError, DashboardShell};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the store or the shell cannot be
/// built, or if the live feed task fails.
#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("nexus-dashboard starting");
    info!(
        zoom = config.map.zoom,
        focus_zoom = config.map.focus_zoom,
        tile_url = %config.map.tile_url,
        live = config.live.enabled,
        live_interval_ms = config.live.interval_ms,
        "Configuration loaded"
    );

    // 3. Build the event store.
    let store = EventStore::with_sample_data()?;
    info!(event_count = store.len(), "Event store built");

    // 4. Create the shell.
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let shell = DashboardShell::new(
        store.clone(),
        &config,
        TracingSurface,
        Arc::clone(&notifier),
    )?;
    let summary = shell.summary();
    info!(
        total = summary.total_events,
        active = summary.active_events,
        high_priority = summary.high_priority,
        health_alerts = summary.health_alerts,
        community_reports = summary.community_reports,
        "Dashboard summary"
    );
    let snapshot = serde_json::to_string(&shell.snapshot())?;
    debug!(%snapshot, "Initial state");

    // 5. Spawn the live feed ticker.
    let feed = shell.live_state();
    let live_config = config.live.clone();
    let ticker = {
        let feed = Arc::clone(&feed);
        tokio::spawn(async move {
            let mut rng = StdRng::from_os_rng();
            let audio = TracingAudio;
            let sinks = LiveSinks {
                notifier: notifier.as_ref(),
                audio: &audio,
            };
            live::run_live_feed(&feed, &store, &live_config, sinks, &mut rng).await
        })
    };
    info!(live = feed.is_live(), "Live feed spawned");

    // 6. Wait for shutdown.
    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    feed.request_stop();
    let totals = ticker.await?;
    info!(
        ticks = totals.ticks,
        notifications = totals.notifications,
        "nexus-dashboard stopped"
    );
    Ok(())
}

/// Load configuration from `nexus-config.yaml`, falling back to defaults.
fn load_config() -> Result<DashboardConfig, DashboardError> {
    let config_path = Path::new("nexus-config.yaml");
    if config_path.exists() {
        Ok(DashboardConfig::from_file(config_path)?)
    } else {
        // Defaults still honor environment overrides.
        Ok(DashboardConfig::parse("")?)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
