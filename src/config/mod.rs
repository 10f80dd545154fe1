// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Data file location and home section sizes
//! - `[gallery]` - Thumbnail strip geometry and scrolling
//! - `[images]` - Decoded image cache
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `SHOWROOM_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use showroom::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ar".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::gallery::GallerySettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ar").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the catalog comes from and how much of it the home screen shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to the JSON data file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Directory that relative picture paths resolve against.
    /// Defaults to the data file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,

    #[serde(default = "default_featured_limit", skip_serializing_if = "Option::is_none")]
    pub featured_limit: Option<usize>,

    #[serde(default = "default_listing_limit", skip_serializing_if = "Option::is_none")]
    pub listing_limit: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            asset_dir: None,
            featured_limit: default_featured_limit(),
            listing_limit: default_listing_limit(),
        }
    }
}

/// Thumbnail strip tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Approximate thumbnail width including the gap.
    #[serde(default = "default_thumbnail_width", skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<f32>,

    /// Slack before the right edge counts as reached.
    #[serde(default = "default_edge_tolerance", skip_serializing_if = "Option::is_none")]
    pub edge_tolerance: Option<f32>,

    /// Distance per scroll-button press.
    #[serde(default = "default_scroll_step", skip_serializing_if = "Option::is_none")]
    pub scroll_step: Option<f32>,

    /// Pointer-to-strip travel ratio while dragging.
    #[serde(default = "default_drag_multiplier", skip_serializing_if = "Option::is_none")]
    pub drag_multiplier: Option<f32>,

    /// Smooth scroll duration in milliseconds (0 disables animation).
    #[serde(
        default = "default_scroll_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_animation_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: default_thumbnail_width(),
            edge_tolerance: default_edge_tolerance(),
            scroll_step: default_scroll_step(),
            drag_multiplier: default_drag_multiplier(),
            scroll_animation_ms: default_scroll_animation_ms(),
        }
    }
}

/// Decoded image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    #[serde(default = "default_cache_capacity", skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub images: ImagesConfig,
}

impl Config {
    /// Data file path, falling back to [`DEFAULT_DATA_FILE`].
    pub fn data_path(&self) -> PathBuf {
        self.catalog
            .data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Directory that relative picture references resolve against.
    pub fn asset_dir(&self, data_path: &Path) -> PathBuf {
        if let Some(dir) = &self.catalog.asset_dir {
            return dir.clone();
        }
        data_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    pub fn featured_limit(&self) -> usize {
        self.catalog
            .featured_limit
            .unwrap_or(DEFAULT_FEATURED_LIMIT)
            .clamp(1, MAX_SECTION_LIMIT)
    }

    pub fn listing_limit(&self) -> usize {
        self.catalog
            .listing_limit
            .unwrap_or(DEFAULT_LISTING_LIMIT)
            .clamp(1, MAX_SECTION_LIMIT)
    }

    pub fn image_cache_capacity(&self) -> usize {
        self.images
            .cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
    }

    /// Gallery settings with every value clamped to its supported range.
    pub fn gallery_settings(&self) -> GallerySettings {
        let g = &self.gallery;
        GallerySettings {
            thumbnail_width: g
                .thumbnail_width
                .unwrap_or(DEFAULT_THUMBNAIL_WIDTH)
                .clamp(MIN_THUMBNAIL_WIDTH, MAX_THUMBNAIL_WIDTH),
            edge_tolerance: g.edge_tolerance.unwrap_or(DEFAULT_EDGE_TOLERANCE).max(0.0),
            scroll_step: g.scroll_step.unwrap_or(DEFAULT_SCROLL_STEP).max(1.0),
            drag_multiplier: g
                .drag_multiplier
                .unwrap_or(DEFAULT_DRAG_MULTIPLIER)
                .clamp(0.1, MAX_DRAG_MULTIPLIER),
            scroll_animation: Duration::from_millis(
                g.scroll_animation_ms
                    .unwrap_or(DEFAULT_SCROLL_ANIMATION_MS)
                    .min(MAX_SCROLL_ANIMATION_MS),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_featured_limit() -> Option<usize> {
    Some(DEFAULT_FEATURED_LIMIT)
}

fn default_listing_limit() -> Option<usize> {
    Some(DEFAULT_LISTING_LIMIT)
}

fn default_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_edge_tolerance() -> Option<f32> {
    Some(DEFAULT_EDGE_TOLERANCE)
}

fn default_scroll_step() -> Option<f32> {
    Some(DEFAULT_SCROLL_STEP)
}

fn default_drag_multiplier() -> Option<f32> {
    Some(DEFAULT_DRAG_MULTIPLIER)
}

fn default_scroll_animation_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_ANIMATION_MS)
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ar".to_string()),
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                data_path: Some(PathBuf::from("/srv/cars/data.json")),
                asset_dir: None,
                featured_limit: Some(3),
                listing_limit: Some(12),
            },
            gallery: GalleryConfig {
                thumbnail_width: Some(96.0),
                ..GalleryConfig::default()
            },
            images: ImagesConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str("[gallery]\nscroll_step = 150.0\n").expect("valid toml");
        assert_eq!(config.gallery.scroll_step, Some(150.0));
        assert_eq!(config.gallery.thumbnail_width, Some(DEFAULT_THUMBNAIL_WIDTH));
        assert_eq!(config.featured_limit(), DEFAULT_FEATURED_LIMIT);
    }

    #[test]
    fn gallery_settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.gallery.thumbnail_width = Some(5.0);
        config.gallery.drag_multiplier = Some(100.0);
        config.gallery.edge_tolerance = Some(-3.0);

        let settings = config.gallery_settings();
        assert_eq!(settings.thumbnail_width, MIN_THUMBNAIL_WIDTH);
        assert_eq!(settings.drag_multiplier, MAX_DRAG_MULTIPLIER);
        assert_eq!(settings.edge_tolerance, 0.0);
    }

    #[test]
    fn asset_dir_defaults_to_data_directory() {
        let config = Config::default();
        let dir = config.asset_dir(Path::new("/srv/site/public/data/data.json"));
        assert_eq!(dir, PathBuf::from("/srv/site/public/data"));
    }
}
