//! Authoring-side map configuration.
//!
//! A [`MapProxy`] carries the width/height chosen in a scene or config file.
//! When the component is added, the
//! [`map_conversion_system`](crate::systems::mapconversion::map_conversion_system)
//! turns it into [`MapData`](super::mapdata::MapData) plus an empty
//! [`MapTiles`](super::maptiles::MapTiles) on the same entity.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAP_WIDTH: i32 = 80;
pub const DEFAULT_MAP_HEIGHT: i32 = 50;

/// Map dimensions as authored, before conversion.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapProxy {
    pub width: i32,
    pub height: i32,
}

impl MapProxy {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for MapProxy {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_80_by_50() {
        let p = MapProxy::default();
        assert_eq!(p.width, 80);
        assert_eq!(p.height, 50);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let p: MapProxy = serde_json::from_str(r#"{ "width": 32 }"#).unwrap();
        assert_eq!(p, MapProxy::new(32, DEFAULT_MAP_HEIGHT));

        let p: MapProxy = serde_json::from_str("{}").unwrap();
        assert_eq!(p, MapProxy::default());
    }
}
