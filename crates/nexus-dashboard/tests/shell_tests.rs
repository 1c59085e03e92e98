//! Integration tests for the dashboard shell.
//!
//! The shell is driven exactly as the web UI would drive it, with a
//! recording map surface and notifier standing in for the real widgets.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use nexus_core::config::DashboardConfig;
use nexus_core::map::RecordingSurface;
use nexus_core::notify::{Notifier, RecordingNotifier};
use nexus_core::query::{Filter, SortKey};
use nexus_core::report::{ACCEPTED_TITLE, MISSING_TITLE, SubmissionOutcome};
use nexus_core::store::EventStore;
use nexus_dashboard::DashboardShell;
use nexus_types::{EventId, EventType, NotificationVariant, Severity};

struct Fixture {
    shell: DashboardShell<RecordingSurface>,
    notifier: Arc<RecordingNotifier>,
}

fn fixture() -> Fixture {
    let notifier = Arc::new(RecordingNotifier::new());
    let shell = DashboardShell::new(
        EventStore::with_sample_data().unwrap(),
        &DashboardConfig::default(),
        RecordingSurface::default(),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    )
    .unwrap();
    Fixture { shell, notifier }
}

fn visible_ids(shell: &DashboardShell<RecordingSurface>) -> Vec<String> {
    shell
        .visible_events()
        .iter()
        .map(|e| e.id.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn startup_selects_first_event_and_draws_everything() {
    let Fixture { shell, .. } = fixture();
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("1"));

    let surface = shell.map().surface();
    assert_eq!(surface.base_renders.len(), 1);
    assert_eq!(surface.base_renders.first().unwrap().0.zoom, 5);
    assert_eq!(surface.markers.len(), 6);
    assert_eq!(surface.highlighted().unwrap().event_id.as_str(), "1");

    let view = shell.map().view();
    assert_eq!(view.zoom, 8);
    assert!((view.center.latitude - 9.9312).abs() < f64::EPSILON);
    assert!(!shell.is_live());
}

#[test]
fn empty_store_starts_without_selection() {
    let shell = DashboardShell::new(
        EventStore::empty(),
        &DashboardConfig::default(),
        RecordingSurface::default(),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();
    assert!(shell.selected_event().is_none());
    assert!(shell.map().surface().markers.is_empty());
    assert_eq!(shell.summary().total_events, 0);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn filters_narrow_the_list_and_the_map() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_severity(Filter::Only(Severity::Medium)).unwrap();
    assert_eq!(visible_ids(&shell), vec!["3", "4", "5"]);
    assert_eq!(shell.map().surface().markers.len(), 3);

    shell.set_search("delhi").unwrap();
    assert_eq!(visible_ids(&shell), vec!["4"]);

    let totals = shell.filter_totals();
    assert_eq!((totals.total, totals.active), (1, 1));
}

#[test]
fn type_filter_and_sort() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_event_type(Filter::Only(EventType::Earthquake)).unwrap();
    assert_eq!(visible_ids(&shell), vec!["6"]);

    shell.set_event_type(Filter::All).unwrap();
    shell.set_sort(Some(SortKey::Recency)).unwrap();
    assert_eq!(visible_ids(&shell), vec!["1", "4", "2", "3", "6", "5"]);
    let placed: Vec<&str> = shell.map().placed().iter().map(EventId::as_str).collect();
    assert_eq!(placed, vec!["1", "4", "2", "3", "6", "5"]);
}

#[test]
fn clear_filters_restores_everything() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_search("zzz").unwrap();
    shell.set_severity(Filter::Only(Severity::Low)).unwrap();
    shell.set_sort(Some(SortKey::Severity)).unwrap();
    assert!(shell.visible_events().is_empty());
    assert!(shell.map().surface().markers.is_empty());

    shell.clear_filters().unwrap();
    assert!(shell.criteria().is_unfiltered());
    assert_eq!(shell.sort(), None);
    assert_eq!(visible_ids(&shell), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(shell.map().surface().markers.len(), 6);
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn selecting_refocuses_and_highlights() {
    let Fixture { mut shell, .. } = fixture();
    assert!(shell.select_event(&EventId::new("3")).unwrap());
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("3"));

    let surface = shell.map().surface();
    assert_eq!(surface.highlighted().unwrap().event_id.as_str(), "3");
    let view = surface.current_view().unwrap();
    assert_eq!(view.zoom, 8);
    assert!((view.center.longitude - 83.3012).abs() < f64::EPSILON);
}

#[test]
fn unknown_selection_is_ignored() {
    let Fixture { mut shell, .. } = fixture();
    let views_before = shell.map().surface().views.len();
    assert!(!shell.select_event(&EventId::new("99")).unwrap());
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("1"));
    assert_eq!(shell.map().surface().views.len(), views_before);
}

#[test]
fn marker_clicks_select_visible_events_only() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_event_type(Filter::Only(EventType::Flood)).unwrap();

    assert!(!shell.handle_marker_click(&EventId::new("2")).unwrap());
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("1"));

    shell.set_event_type(Filter::All).unwrap();
    assert!(shell.handle_marker_click(&EventId::new("2")).unwrap());
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("2"));
}

#[test]
fn selection_survives_filtering_it_out() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_severity(Filter::Only(Severity::Low)).unwrap();
    assert_eq!(shell.selected_event().map(|e| e.id.as_str()), Some("1"));
    assert!(shell.map().surface().highlighted().is_none());
}

// ---------------------------------------------------------------------------
// Civic report form
// ---------------------------------------------------------------------------

#[test]
fn incomplete_report_keeps_form_and_warns() {
    let Fixture {
        mut shell,
        notifier,
    } = fixture();
    shell.update_form(|form| {
        form.description = String::from("x");
        form.category = String::from("infrastructure");
    });

    let outcome = shell.submit_report();
    assert_eq!(
        outcome,
        SubmissionOutcome::MissingFields {
            fields: vec!["title"]
        }
    );
    assert_eq!(shell.form().description, "x");

    let toast = notifier.last().unwrap();
    assert_eq!(toast.title, MISSING_TITLE);
    assert_eq!(toast.variant, NotificationVariant::Destructive);
}

#[test]
fn complete_report_resets_form_and_confirms() {
    let Fixture {
        mut shell,
        notifier,
    } = fixture();
    shell.update_form(|form| {
        form.title = String::from("t");
        form.description = String::from("d");
        form.category = String::from("c");
        form.location = String::from("MG Road");
    });

    assert!(shell.submit_report().is_accepted());
    assert!(shell.form().is_cleared());

    let toast = notifier.last().unwrap();
    assert_eq!(toast.title, ACCEPTED_TITLE);
    assert_eq!(toast.variant, NotificationVariant::Default);
    assert_eq!(notifier.len(), 1);
}

#[test]
fn submission_never_touches_the_store() {
    let Fixture { mut shell, .. } = fixture();
    let before = shell.store().len();
    shell.update_form(|form| {
        form.title = String::from("Pothole");
        form.description = String::from("Deep");
        form.category = String::from("traffic");
    });
    let _ = shell.submit_report();
    assert_eq!(shell.store().len(), before);
}

// ---------------------------------------------------------------------------
// Live mode, summary and panels
// ---------------------------------------------------------------------------

#[test]
fn live_flag_is_shared_with_the_ticker() {
    let Fixture { shell, .. } = fixture();
    let feed = shell.live_state();
    assert!(!shell.set_live(true));
    assert!(feed.is_live());
    assert!(shell.set_live(false));
    assert!(!feed.is_live());
}

#[tokio::test(start_paused = true)]
async fn live_ticks_notify_without_changing_the_view() {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut config = DashboardConfig::default();
    config.live.enabled = true;
    config.live.notification_chance = 1.0;
    let store = EventStore::with_sample_data().unwrap();
    let shell = DashboardShell::new(
        store.clone(),
        &config,
        RecordingSurface::default(),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    )
    .unwrap();

    let feed = shell.live_state();
    let ticker = {
        let feed = Arc::clone(&feed);
        let notifier = Arc::clone(&notifier);
        let live_config = config.live.clone();
        tokio::spawn(async move {
            use rand::SeedableRng;
            let mut rng = rand::rngs::StdRng::seed_from_u64(11);
            let audio = nexus_core::notify::SilentAudio;
            let sinks = nexus_core::live::LiveSinks {
                notifier: notifier.as_ref(),
                audio: &audio,
            };
            nexus_core::live::run_live_feed(&feed, &store, &live_config, sinks, &mut rng).await
        })
    };

    tokio::time::sleep(std::time::Duration::from_millis(65_000)).await;
    feed.request_stop();
    let totals = ticker.await.unwrap();

    assert_eq!(totals.ticks, 2);
    assert_eq!(notifier.len(), 2);
    assert_eq!(visible_ids(&shell), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(shell.store().len(), 6);
}

#[test]
fn summary_and_panels() {
    let Fixture { shell, .. } = fixture();
    let summary = shell.summary();
    assert_eq!(summary.total_events, 6);
    assert_eq!(summary.active_events, 3);
    assert_eq!(summary.high_priority, 2);
    assert_eq!(summary.health_alerts, 12);
    assert_eq!(summary.community_reports, 247);

    assert_eq!(shell.health_sentinel().indicators.len(), 3);
    assert_eq!(shell.resilience_hub().resources.len(), 4);
    assert_eq!(shell.civic_reporter().categories.len(), 6);
}

#[test]
fn snapshot_serializes_current_state() {
    let Fixture { mut shell, .. } = fixture();
    shell.set_severity(Filter::Only(Severity::High)).unwrap();
    let json = serde_json::to_value(shell.snapshot()).unwrap();
    assert_eq!(json["criteria"]["severity"], "High");
    assert_eq!(json["criteria"]["eventType"], "all");
    assert_eq!(json["selected"], "1");
    assert_eq!(json["visible"], serde_json::json!(["1", "2"]));
    assert_eq!(json["totals"]["total"], 2);
    assert_eq!(json["live"], false);
}
