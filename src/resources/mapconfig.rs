//! Map configuration resource.
//!
//! Holds the defaults used when a map is authored without a scene file.
//! Values are loaded from an INI file; anything missing keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [map]
//! width = 80
//! height = 50
//!
//! [debug]
//! gizmos = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::mapproxy::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, MapProxy};

const DEFAULT_GIZMOS: bool = false;
pub const DEFAULT_CONFIG_PATH: &str = "./mapproxy.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Map width in tiles.
    pub width: i32,
    /// Map height in tiles.
    pub height: i32,
    /// Draw map gizmos.
    pub gizmos: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            gizmos: DEFAULT_GIZMOS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with default values and a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load the configuration the binary runs with.
    ///
    /// An explicitly given file must load. Without one, the default path is
    /// tried and any failure falls back to defaults.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, String> {
        match path {
            Some(path) => {
                let mut config = Self::with_path(path);
                config.load_from_file()?;
                Ok(config)
            }
            None => {
                let mut config = Self::new();
                if let Err(e) = config.load_from_file() {
                    warn!("Config file not found or invalid, using defaults: {}", e);
                    config = Self::new();
                }
                Ok(config)
            }
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [map] section
        let width = read_dimension(&config, "width")?;
        let height = read_dimension(&config, "height")?;
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }

        // [debug] section
        if let Some(gizmos) = config.getbool("debug", "gizmos").ok().flatten() {
            self.gizmos = gizmos;
        }

        info!(
            "Loaded config: map {}x{}, gizmos={}",
            self.width, self.height, self.gizmos
        );

        Ok(())
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("map", "width", Some(self.width.to_string()));
        config.set("map", "height", Some(self.height.to_string()));
        config.set("debug", "gizmos", Some(self.gizmos.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// The authoring record these settings describe.
    pub fn proxy(&self) -> MapProxy {
        MapProxy::new(self.width, self.height)
    }
}

/// Read a `[map]` dimension, rejecting values that do not fit in an `i32`.
fn read_dimension(config: &Ini, key: &str) -> Result<Option<i32>, String> {
    let Some(value) = config.getint("map", key).ok().flatten() else {
        return Ok(None);
    };
    i32::try_from(value)
        .map(Some)
        .map_err(|_| format!("map {} out of range: {}", key, value))
}
