//! Configuration loading and typed config structures for the Nexus dashboard.
//!
//! The canonical configuration lives in `nexus-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default so an empty (or missing) file yields a working dashboard.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dashboard configuration.
///
/// Mirrors the structure of `nexus-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Map widget settings (initial view, tiles).
    #[serde(default)]
    pub map: MapConfig,

    /// Live mode ticker settings.
    #[serde(default)]
    pub live: LiveConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `NEXUS_TILE_URL` overrides `map.tile_url`
    /// - `NEXUS_LIVE_INTERVAL_MS` overrides `live.interval_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_raw(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_raw(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml maps an empty document to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NEXUS_TILE_URL") {
            self.map.tile_url = val;
        }
        if let Some(ms) = std::env::var("NEXUS_LIVE_INTERVAL_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
        {
            self.live.interval_ms = ms;
        }
    }
}

/// Map widget configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Latitude of the initial view center.
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    /// Longitude of the initial view center.
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,

    /// Zoom level of the initial view.
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Zoom level used when focusing a selected event.
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    /// Tile URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile subdomains substituted for `{s}`.
    #[serde(default = "default_tile_subdomains")]
    pub tile_subdomains: Vec<String>,

    /// Attribution shown in the map corner.
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            tile_url: default_tile_url(),
            tile_subdomains: default_tile_subdomains(),
            attribution: default_attribution(),
        }
    }
}

/// Live mode configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveConfig {
    /// Whether live mode is on at startup.
    #[serde(default)]
    pub enabled: bool,

    /// Real-time milliseconds between ticks.
    #[serde(default = "default_live_interval_ms")]
    pub interval_ms: u64,

    /// Probability (0.0 to 1.0) that a tick raises a notification.
    #[serde(default = "default_notification_chance")]
    pub notification_chance: f64,

    /// Whether to play the audio cue with each fabricated notification.
    #[serde(default = "default_true")]
    pub audio_cue: bool,

    /// How long fabricated toasts stay on screen.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: default_live_interval_ms(),
            notification_chance: default_notification_chance(),
            audio_cue: true,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_center_latitude() -> f64 {
    20.5937
}

const fn default_center_longitude() -> f64 {
    78.9629
}

const fn default_zoom() -> u8 {
    5
}

const fn default_focus_zoom() -> u8 {
    8
}

fn default_tile_url() -> String {
    String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
}

fn default_tile_subdomains() -> Vec<String> {
    vec![String::from("a"), String::from("b"), String::from("c")]
}

fn default_attribution() -> String {
    String::from("\u{a9} OpenStreetMap contributors")
}

const fn default_live_interval_ms() -> u64 {
    30_000
}

const fn default_notification_chance() -> f64 {
    0.3
}

const fn default_toast_duration_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.map.focus_zoom, 8);
        assert!((config.map.center_latitude - 20.5937).abs() < f64::EPSILON);
        assert!(!config.live.enabled);
        assert_eq!(config.live.toast_duration_ms, 5_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
map:
  center_latitude: 19.076
  center_longitude: 72.8777
  zoom: 6
  focus_zoom: 10
  tile_subdomains: ["a"]
  attribution: "test tiles"

live:
  enabled: true
  notification_chance: 0.5
  audio_cue: false
  toast_duration_ms: 2000

logging:
  level: "debug"
  json: true
"#;

        let config = DashboardConfig::parse_raw(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.focus_zoom, 10);
        assert_eq!(config.map.tile_subdomains, vec![String::from("a")]);
        assert!(config.live.enabled);
        assert!(!config.live.audio_cue);
        assert!((config.live.notification_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "map:\n  zoom: 4\n";
        let config = DashboardConfig::parse_raw(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Zoom is overridden
        assert_eq!(config.map.zoom, 4);
        // Everything else uses defaults
        assert_eq!(config.map.focus_zoom, 8);
        assert_eq!(config.map.tile_url, default_tile_url());
        assert_eq!(config.live.interval_ms, 30_000);
        assert_eq!(config.live.toast_duration_ms, 5_000);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = DashboardConfig::parse_raw("");
        assert_eq!(config.ok(), Some(DashboardConfig::default()));
    }

    #[test]
    fn raw_parse_ignores_environment() {
        // Holds whether or not NEXUS_TILE_URL / NEXUS_LIVE_INTERVAL_MS are set.
        let yaml = r#"
map:
  tile_url: "https://tiles.test/{z}/{x}/{y}.png"
live:
  interval_ms: 1500
"#;
        let config = DashboardConfig::parse_raw(yaml).ok().unwrap_or_default();
        assert_eq!(config.map.tile_url, "https://tiles.test/{z}/{x}/{y}.png");
        assert_eq!(config.live.interval_ms, 1_500);
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let config = DashboardConfig::parse_raw("map: [unclosed");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
        let config = DashboardConfig::parse("map: [unclosed");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("nexus-config.yaml");
        if path.exists() {
            let config = DashboardConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
