//! Map widget boundary.
//!
//! The dashboard never draws anything itself. [`MapController`] turns the
//! current event view into [`Marker`] values and pushes them through the
//! [`MapSurface`] trait, which a real widget (or a test recorder) implements.
//!
//! - Base map: fixed home view over India plus a z/x/y tile source.
//! - Markers: one per visible event, glyph by type, color by severity,
//!   the selected event highlighted, popup HTML rendered by `minijinja`.
//! - Clicks: the surface reports a marker's event id back and the
//!   controller resolves it against the store.

use minijinja::{Environment, context};
use nexus_types::{CrisisEvent, EventId, EventType, GeoPoint, Severity};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::MapConfig;
use crate::error::PopupError;
use crate::store::EventStore;

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Marker color for high severity events.
pub const HIGH_COLOR: &str = "#ef4444";
/// Marker color for medium severity events.
pub const MEDIUM_COLOR: &str = "#f97316";
/// Marker color for low severity events.
pub const LOW_COLOR: &str = "#eab308";

/// Fill color of a marker.
pub const fn marker_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => HIGH_COLOR,
        Severity::Medium => MEDIUM_COLOR,
        Severity::Low => LOW_COLOR,
    }
}

/// Emoji drawn inside a marker.
pub const fn marker_glyph(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Flood => "\u{1f30a}",
        EventType::Heatwave => "\u{1f321}\u{fe0f}",
        EventType::Cyclone => "\u{1f300}",
        EventType::HealthAlert => "\u{1f3e5}",
        EventType::CivicIssue => "\u{1f3db}\u{fe0f}",
        EventType::Earthquake => "\u{26a1}",
        EventType::Drought => "\u{1f3dc}\u{fe0f}",
    }
}

// ---------------------------------------------------------------------------
// View and tiles
// ---------------------------------------------------------------------------

/// Center and zoom of the visible map area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// Map center.
    pub center: GeoPoint,
    /// Zoom level.
    pub zoom: u8,
}

impl MapView {
    /// The initial view from configuration.
    pub const fn home(config: &MapConfig) -> Self {
        Self {
            center: GeoPoint::new(config.center_latitude, config.center_longitude),
            zoom: config.zoom,
        }
    }
}

/// A slippy-map tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    /// URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    /// Values rotated through `{s}`.
    pub subdomains: Vec<String>,
    /// Attribution text.
    pub attribution: String,
}

impl TileSource {
    /// Build the tile source from configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            url_template: config.tile_url.clone(),
            subdomains: config.tile_subdomains.clone(),
            attribution: config.attribution.clone(),
        }
    }

    /// URL of one tile. The subdomain is picked by `(x + y) mod n`.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = usize::try_from(x.wrapping_add(y))
            .ok()
            .and_then(|sum| sum.checked_rem(self.subdomains.len()))
            .and_then(|index| self.subdomains.get(index))
            .map_or("", String::as_str);
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

// ---------------------------------------------------------------------------
// Markers and popups
// ---------------------------------------------------------------------------

/// One marker as handed to the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Event reported back on click.
    pub event_id: EventId,
    /// Where to place it.
    pub position: GeoPoint,
    /// Emoji by event type.
    pub glyph: &'static str,
    /// Fill color by severity.
    pub color: &'static str,
    /// Whether this is the selected event.
    pub highlighted: bool,
    /// Popup body, HTML-escaped.
    pub popup_html: String,
}

const POPUP_TEMPLATE: &str = r#"<div style="font-family: system-ui; min-width: 200px;">
  <h3 style="margin: 0 0 8px 0; font-weight: bold; color: {{ color }};">{{ title }}</h3>
  <p style="margin: 0 0 8px 0; font-size: 14px; color: #6b7280;">{{ description }}</p>
  <div style="display: flex; gap: 8px; margin-bottom: 8px;">
    <span style="background-color: {{ color }}; color: white; padding: 2px 8px; border-radius: 12px; font-size: 12px;">{{ severity }}</span>
    <span style="background-color: #f3f4f6; color: #374151; padding: 2px 8px; border-radius: 12px; font-size: 12px;">{{ event_type }}</span>
  </div>
  <p style="margin: 0; font-size: 12px; color: #9ca3af;">
    <strong>Location:</strong> {{ location }}, {{ state }}<br>
    <strong>Source:</strong> {{ source }}<br>
    <strong>Time:</strong> {{ time }}
  </p>
</div>"#;

/// Renders marker popups. The `.html` template name turns on autoescaping.
pub struct PopupRenderer {
    env: Environment<'static>,
}

impl PopupRenderer {
    const NAME: &'static str = "popup.html";

    /// Compile the popup template.
    pub fn new() -> Result<Self, PopupError> {
        let mut env = Environment::new();
        env.add_template(Self::NAME, POPUP_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the popup for one event.
    pub fn render(&self, event: &CrisisEvent) -> Result<String, PopupError> {
        let template = self.env.get_template(Self::NAME)?;
        let html = template.render(context! {
            color => marker_color(event.severity),
            title => &event.title,
            description => &event.description,
            severity => event.severity.label(),
            event_type => event.event_type.label(),
            location => &event.location.name,
            state => &event.location.state,
            source => &event.source,
            time => event.timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        })?;
        Ok(html)
    }
}

impl std::fmt::Debug for PopupRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopupRenderer").finish_non_exhaustive()
    }
}

/// Build the marker for one event.
pub fn build_marker(
    event: &CrisisEvent,
    selected: Option<&EventId>,
    popups: &PopupRenderer,
) -> Result<Marker, PopupError> {
    Ok(Marker {
        event_id: event.id.clone(),
        position: event.location.point(),
        glyph: marker_glyph(event.event_type),
        color: marker_color(event.severity),
        highlighted: selected == Some(&event.id),
        popup_html: popups.render(event)?,
    })
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A map widget the controller can drive.
pub trait MapSurface {
    /// Draw the base map and tile layer.
    fn render_base(&mut self, view: &MapView, tiles: &TileSource);

    /// Remove every marker.
    fn clear_markers(&mut self);

    /// Add one marker.
    fn place_marker(&mut self, marker: Marker);

    /// Re-center and zoom.
    fn set_view(&mut self, view: MapView);
}

/// Keeps every call in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    /// Base map renders, in order.
    pub base_renders: Vec<(MapView, TileSource)>,
    /// Markers currently on the map.
    pub markers: Vec<Marker>,
    /// Views set after the base render, in order.
    pub views: Vec<MapView>,
    /// Number of times the markers were cleared.
    pub clears: usize,
}

impl RecordingSurface {
    /// The most recently set view.
    pub fn current_view(&self) -> Option<&MapView> {
        self.views
            .last()
            .or_else(|| self.base_renders.last().map(|(view, _)| view))
    }

    /// The highlighted marker, if any.
    pub fn highlighted(&self) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.highlighted)
    }
}

impl MapSurface for RecordingSurface {
    fn render_base(&mut self, view: &MapView, tiles: &TileSource) {
        self.base_renders.push((*view, tiles.clone()));
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.clears = self.clears.saturating_add(1);
    }

    fn place_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn set_view(&mut self, view: MapView) {
        self.views.push(view);
    }
}

/// Logs map calls. Used by the headless binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSurface;

impl MapSurface for TracingSurface {
    fn render_base(&mut self, view: &MapView, tiles: &TileSource) {
        info!(
            latitude = view.center.latitude,
            longitude = view.center.longitude,
            zoom = view.zoom,
            tiles = %tiles.url_template,
            "base map rendered"
        );
    }

    fn clear_markers(&mut self) {
        debug!("markers cleared");
    }

    fn place_marker(&mut self, marker: Marker) {
        debug!(
            event_id = %marker.event_id,
            glyph = marker.glyph,
            color = marker.color,
            highlighted = marker.highlighted,
            "marker placed"
        );
    }

    fn set_view(&mut self, view: MapView) {
        info!(
            latitude = view.center.latitude,
            longitude = view.center.longitude,
            zoom = view.zoom,
            "map view changed"
        );
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Drives a [`MapSurface`] from dashboard state.
#[derive(Debug)]
pub struct MapController<S> {
    surface: S,
    popups: PopupRenderer,
    tiles: TileSource,
    home: MapView,
    focus_zoom: u8,
    view: MapView,
    placed: Vec<EventId>,
}

impl<S: MapSurface> MapController<S> {
    /// Create a controller. Nothing is drawn until [`initialize`](Self::initialize).
    pub fn new(surface: S, config: &MapConfig) -> Result<Self, PopupError> {
        let home = MapView::home(config);
        Ok(Self {
            surface,
            popups: PopupRenderer::new()?,
            tiles: TileSource::from_config(config),
            home,
            focus_zoom: config.focus_zoom,
            view: home,
            placed: Vec::new(),
        })
    }

    /// Draw the base map at the home view.
    pub fn initialize(&mut self) {
        self.view = self.home;
        self.surface.render_base(&self.home, &self.tiles);
    }

    /// Replace every marker with one per event, highlighting `selected`.
    ///
    /// Returns the number of markers placed.
    pub fn redraw(
        &mut self,
        events: &[&CrisisEvent],
        selected: Option<&EventId>,
    ) -> Result<usize, PopupError> {
        let markers = events
            .iter()
            .map(|event| build_marker(event, selected, &self.popups))
            .collect::<Result<Vec<_>, _>>()?;

        self.surface.clear_markers();
        self.placed.clear();
        for marker in markers {
            self.placed.push(marker.event_id.clone());
            self.surface.place_marker(marker);
        }
        debug!(markers = self.placed.len(), "markers redrawn");
        Ok(self.placed.len())
    }

    /// Center on an event at the focus zoom.
    pub fn focus(&mut self, event: &CrisisEvent) {
        let view = MapView {
            center: event.location.point(),
            zoom: self.focus_zoom,
        };
        self.view = view;
        self.surface.set_view(view);
    }

    /// Resolve a marker click to its event.
    ///
    /// Ids that are not currently on the map, or not in the store, are
    /// ignored.
    pub fn resolve_click<'a>(
        &self,
        store: &'a EventStore,
        id: &EventId,
    ) -> Option<&'a CrisisEvent> {
        if !self.placed.contains(id) {
            debug!(event_id = %id, "click on unknown marker ignored");
            return None;
        }
        store.get(id)
    }

    /// The current view.
    pub const fn view(&self) -> MapView {
        self.view
    }

    /// The tile source.
    pub const fn tiles(&self) -> &TileSource {
        &self.tiles
    }

    /// Event ids of the markers on the map, in placement order.
    pub fn placed(&self) -> &[EventId] {
        &self.placed
    }

    /// The underlying surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The underlying surface, mutably.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
