//! Live mode ticker.
//!
//! While the live flag is on, [`run_live_feed`] wakes every
//! `interval_ms` and may fabricate one notification about a random event,
//! optionally with an audio cue. Ticks never touch the event store.
//!
//! # Architecture
//!
//! [`LiveFeedState`] is shared behind an [`Arc`](std::sync::Arc) between the
//! ticker task and the dashboard shell. Control fields are atomics; a
//! [`Notify`] wakes the ticker when the flag flips or a stop is requested.
//! Turning live mode off cancels the pending tick but never interrupts one
//! that is already running (a tick is synchronous and does no I/O).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use nexus_types::{CrisisEvent, Notification, Severity};
use rand::Rng;
use rand::seq::IndexedRandom;
use tokio::sync::Notify;
use tracing::{debug, info};

use crate::config::LiveConfig;
use crate::notify::{AudioCue, Beep, Notifier};
use crate::store::EventStore;

/// Shortest accepted tick interval.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Shared live mode control state.
#[derive(Debug)]
pub struct LiveFeedState {
    /// Whether live mode is on.
    live: AtomicBool,

    /// Wakes the ticker when `live` flips or a stop is requested.
    wake: Notify,

    /// Whether the ticker should exit.
    stop_requested: AtomicBool,

    /// Current tick interval in milliseconds (runtime-adjustable).
    interval_ms: AtomicU64,

    /// Ticks executed so far.
    ticks: AtomicU64,
}

impl LiveFeedState {
    /// Create control state from configuration.
    ///
    /// Intervals below [`MIN_INTERVAL_MS`] are raised to it.
    pub fn new(config: &LiveConfig) -> Self {
        Self {
            live: AtomicBool::new(config.enabled),
            wake: Notify::new(),
            stop_requested: AtomicBool::new(false),
            interval_ms: AtomicU64::new(config.interval_ms.max(MIN_INTERVAL_MS)),
            ticks: AtomicU64::new(0),
        }
    }

    // -----------------------------------------------------------------------
    // Live flag
    // -----------------------------------------------------------------------

    /// Whether live mode is on.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Turn live mode on or off. Returns the previous value.
    ///
    /// Flipping the flag restarts the interval; setting it to its current
    /// value does nothing.
    pub fn set_live(&self, live: bool) -> bool {
        let prev = self.live.swap(live, Ordering::AcqRel);
        if prev != live {
            info!(live, "live mode toggled");
            self.wake.notify_one();
        }
        prev
    }

    /// Wait until live mode is on or a stop is requested.
    pub async fn wait_until_live(&self) {
        while !self.is_live() && !self.is_stop_requested() {
            self.wake.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Ask the ticker to exit and wake it.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.wake.notify_one();
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Interval
    // -----------------------------------------------------------------------

    /// Current tick interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.load(Ordering::Acquire)
    }

    /// Set the tick interval. Takes effect from the next wait.
    ///
    /// Returns the previous interval, or `None` if `ms` is below
    /// [`MIN_INTERVAL_MS`].
    pub fn set_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < MIN_INTERVAL_MS {
            return None;
        }
        Some(self.interval_ms.swap(ms, Ordering::AcqRel))
    }

    /// Ticks executed since the ticker started.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }
}

/// Totals reported when the ticker exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiveFeedSummary {
    /// Ticks executed.
    pub ticks: u64,
    /// Notifications fabricated.
    pub notifications: u64,
}

/// Where a tick sends its output.
#[derive(Clone, Copy)]
pub struct LiveSinks<'a> {
    /// Toast sink.
    pub notifier: &'a dyn Notifier,
    /// Audio sink.
    pub audio: &'a dyn AudioCue,
}

fn clamp_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

fn describe(event: &CrisisEvent) -> String {
    format!(
        "{} {} alert for {}, {}",
        event.severity.label(),
        event.event_type.label(),
        event.location.name,
        event.location.state
    )
}

/// Roll the dice for one tick and build a notification about a random event.
///
/// Returns `None` when the roll fails or the store is empty. The store is
/// only read.
pub fn fabricate_notification<R>(
    rng: &mut R,
    store: &EventStore,
    config: &LiveConfig,
) -> Option<Notification>
where
    R: Rng + ?Sized,
{
    if !rng.random_bool(clamp_chance(config.notification_chance)) {
        return None;
    }
    let event = store.all().choose(rng)?;
    let notification = if event.severity == Severity::High {
        Notification::destructive(event.title.clone(), describe(event))
    } else {
        Notification::info(event.title.clone(), describe(event))
    };
    Some(notification.with_duration_ms(config.toast_duration_ms))
}

/// Execute one tick. Returns whether a notification was raised.
pub fn run_tick<R>(
    rng: &mut R,
    store: &EventStore,
    config: &LiveConfig,
    sinks: LiveSinks<'_>,
) -> bool
where
    R: Rng + ?Sized,
{
    let Some(notification) = fabricate_notification(rng, store, config) else {
        return false;
    };
    debug!(title = %notification.title, "live notification fabricated");
    sinks.notifier.notify(notification);
    if config.audio_cue {
        sinks.audio.play(Beep::ALERT);
    }
    true
}

/// Drive the ticker until [`LiveFeedState::request_stop`] is called.
///
/// Sleeps while live mode is off. Each wait is cut short when the flag
/// flips, so disabling live mode drops the pending tick.
pub async fn run_live_feed<R>(
    feed: &LiveFeedState,
    store: &EventStore,
    config: &LiveConfig,
    sinks: LiveSinks<'_>,
    rng: &mut R,
) -> LiveFeedSummary
where
    R: Rng + ?Sized,
{
    let mut summary = LiveFeedSummary::default();

    info!(
        live = feed.is_live(),
        interval_ms = feed.interval_ms(),
        notification_chance = config.notification_chance,
        "live feed starting"
    );

    loop {
        if feed.is_stop_requested() {
            break;
        }

        if !feed.is_live() {
            debug!("live feed idle, waiting");
            feed.wait_until_live().await;
            continue;
        }

        let interval = Duration::from_millis(feed.interval_ms());
        tokio::select! {
            () = tokio::time::sleep(interval) => {}
            () = feed.wake.notified() => continue,
        }

        if feed.is_stop_requested() || !feed.is_live() {
            continue;
        }

        feed.ticks.fetch_add(1, Ordering::AcqRel);
        summary.ticks = summary.ticks.saturating_add(1);
        if run_tick(rng, store, config, sinks) {
            summary.notifications = summary.notifications.saturating_add(1);
        }
    }

    info!(
        ticks = summary.ticks,
        notifications = summary.notifications,
        "live feed stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::notify::{CountingAudio, RecordingNotifier};

    fn config(chance: f64) -> LiveConfig {
        LiveConfig {
            enabled: true,
            notification_chance: chance,
            ..LiveConfig::default()
        }
    }

    fn store() -> EventStore {
        EventStore::with_sample_data()
            .ok()
            .unwrap_or_else(EventStore::empty)
    }

    struct Harness {
        feed: Arc<LiveFeedState>,
        notifier: Arc<RecordingNotifier>,
        audio: Arc<CountingAudio>,
        handle: tokio::task::JoinHandle<LiveFeedSummary>,
    }

    fn spawn(config: LiveConfig) -> Harness {
        let feed = Arc::new(LiveFeedState::new(&config));
        let notifier = Arc::new(RecordingNotifier::new());
        let audio = Arc::new(CountingAudio::new());
        let store = store();
        let handle = {
            let feed = Arc::clone(&feed);
            let notifier = Arc::clone(&notifier);
            let audio = Arc::clone(&audio);
            tokio::spawn(async move {
                let mut rng = StdRng::seed_from_u64(7);
                let sinks = LiveSinks {
                    notifier: notifier.as_ref(),
                    audio: audio.as_ref(),
                };
                run_live_feed(&feed, &store, &config, sinks, &mut rng).await
            })
        };
        Harness {
            feed,
            notifier,
            audio,
            handle,
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[test]
    fn zero_chance_never_fabricates() {
        let mut rng = StdRng::seed_from_u64(1);
        let store = store();
        for _ in 0..100 {
            assert!(fabricate_notification(&mut rng, &store, &config(0.0)).is_none());
        }
    }

    #[test]
    fn certain_chance_picks_a_stored_event() {
        let mut rng = StdRng::seed_from_u64(2);
        let store = store();
        let before: Vec<CrisisEvent> = store.all().to_vec();
        for _ in 0..20 {
            let notification = fabricate_notification(&mut rng, &store, &config(1.0));
            assert!(notification.is_some());
            let notification = notification.unwrap_or_else(|| Notification::info("", ""));
            assert!(store.iter().any(|e| e.title == notification.title));
            assert_eq!(notification.duration_ms, Some(5_000));
        }
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn empty_store_fabricates_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = EventStore::empty();
        assert!(fabricate_notification(&mut rng, &empty, &config(1.0)).is_none());
    }

    #[test]
    fn invalid_chance_is_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let store = store();
        assert!(fabricate_notification(&mut rng, &store, &config(f64::NAN)).is_none());
        assert!(fabricate_notification(&mut rng, &store, &config(7.5)).is_some());
        assert!(fabricate_notification(&mut rng, &store, &config(-1.0)).is_none());
    }

    #[test]
    fn interval_below_minimum_is_rejected() {
        let feed = LiveFeedState::new(&LiveConfig::default());
        assert_eq!(feed.interval_ms(), 30_000);
        assert_eq!(feed.set_interval_ms(50), None);
        assert_eq!(feed.set_interval_ms(1_000), Some(30_000));
        assert_eq!(feed.interval_ms(), 1_000);

        let tiny = LiveFeedState::new(&LiveConfig {
            interval_ms: 1,
            ..LiveConfig::default()
        });
        assert_eq!(tiny.interval_ms(), MIN_INTERVAL_MS);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_fire_on_interval() {
        let harness = spawn(config(1.0));
        sleep_ms(95_000).await;
        assert_eq!(harness.feed.ticks(), 3);
        assert_eq!(harness.notifier.len(), 3);
        assert_eq!(harness.audio.played(), 3);

        harness.feed.request_stop();
        let summary = harness.handle.await.ok().unwrap_or_default();
        assert_eq!(
            summary,
            LiveFeedSummary {
                ticks: 3,
                notifications: 3
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_feed_stays_quiet() {
        let harness = spawn(LiveConfig {
            enabled: false,
            notification_chance: 1.0,
            ..LiveConfig::default()
        });
        sleep_ms(300_000).await;
        assert_eq!(harness.feed.ticks(), 0);
        assert!(harness.notifier.is_empty());

        harness.feed.request_stop();
        let summary = harness.handle.await.ok().unwrap_or_default();
        assert_eq!(summary.ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn toggling_off_cancels_pending_tick() {
        let harness = spawn(config(1.0));
        sleep_ms(45_000).await;
        assert_eq!(harness.feed.ticks(), 1);

        assert!(harness.feed.set_live(false));
        sleep_ms(120_000).await;
        assert_eq!(harness.feed.ticks(), 1);

        assert!(!harness.feed.set_live(true));
        sleep_ms(31_000).await;
        assert_eq!(harness.feed.ticks(), 2);

        harness.feed.request_stop();
        let summary = harness.handle.await.ok().unwrap_or_default();
        assert_eq!(summary.ticks, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn audio_cue_can_be_muted() {
        let harness = spawn(LiveConfig {
            audio_cue: false,
            ..config(1.0)
        });
        sleep_ms(61_000).await;
        assert_eq!(harness.notifier.len(), 2);
        assert_eq!(harness.audio.played(), 0);
        harness.feed.request_stop();
        let _ = harness.handle.await;
    }
}
