//! Notification and audio cue boundaries.
//!
//! Both are fire-and-forget sinks. The dashboard never waits on them and
//! never learns whether a toast was shown or a tone was heard.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use nexus_types::{Notification, NotificationVariant};
use tracing::{debug, info, warn};

/// Sink for transient user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

/// A short synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beep {
    /// Sine frequency in hertz.
    pub frequency_hz: u32,
    /// Tone length in milliseconds.
    pub duration_ms: u64,
    /// Gain between 0.0 and 1.0.
    pub volume: f32,
}

impl Beep {
    /// The tone played with live-mode notifications.
    pub const ALERT: Self = Self {
        frequency_hz: 800,
        duration_ms: 200,
        volume: 0.1,
    };
}

impl Default for Beep {
    fn default() -> Self {
        Self::ALERT
    }
}

/// Sink for audio cues.
pub trait AudioCue: Send + Sync {
    /// Play a tone.
    fn play(&self, beep: Beep);
}

// ---------------------------------------------------------------------------
// Notifiers
// ---------------------------------------------------------------------------

/// Writes notifications to the log. Used by the headless binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => info!(
                id = %notification.id,
                title = %notification.title,
                duration_ms = ?notification.duration_ms,
                "{}",
                notification.body
            ),
            NotificationVariant::Destructive => warn!(
                id = %notification.id,
                title = %notification.title,
                duration_ms = ?notification.duration_ms,
                "{}",
                notification.body
            ),
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    fn play(&self, _beep: Beep) {}
}

/// Logs each tone at debug level instead of playing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudio;

impl AudioCue for TracingAudio {
    fn play(&self, beep: Beep) {
        debug!(
            frequency_hz = beep.frequency_hz,
            duration_ms = beep.duration_ms,
            "audio cue"
        );
    }
}

/// Counts tones played.
#[derive(Debug, Default)]
pub struct CountingAudio {
    played: AtomicUsize,
}

impl CountingAudio {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tones played so far.
    pub fn played(&self) -> usize {
        self.played.load(Ordering::Relaxed)
    }
}

impl AudioCue for CountingAudio {
    fn play(&self, _beep: Beep) {
        self.played.fetch_add(1, Ordering::Relaxed);
    }
}
