//! Scene files describing authored maps.
//!
//! A scene is a JSON document listing the map objects to author:
//!
//! ```json
//! {
//!   "maps": [
//!     { "name": "overworld", "width": 80, "height": 50 },
//!     { "name": "cellar", "width": 30 }
//!   ]
//! }
//! ```
//!
//! Missing dimensions fall back to the [`MapProxy`] defaults. Spawning a
//! scene only creates authoring entities; conversion happens on the next
//! frame.

use bevy_ecs::prelude::*;
use log::info;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::components::maplabel::MapLabel;
use crate::components::maporder::MapOrder;
use crate::components::mapproxy::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, MapProxy};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SceneData {
    #[serde(default)]
    pub maps: Vec<SceneMap>,
}

/// One authored map object.
#[derive(Deserialize, Debug, Clone)]
pub struct SceneMap {
    pub name: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    DEFAULT_MAP_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_MAP_HEIGHT
}

impl SceneMap {
    pub fn proxy(&self) -> MapProxy {
        MapProxy::new(self.width, self.height)
    }
}

impl SceneData {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Spawn one authoring entity per map, in file order.
    pub fn spawn(&self, world: &mut World) -> Vec<Entity> {
        let entities: Vec<Entity> = self
            .maps
            .iter()
            .enumerate()
            .map(|(i, m)| {
                world
                    .spawn((MapLabel::new(&m.name), MapOrder(i), m.proxy()))
                    .id()
            })
            .collect();
        info!("Spawned {} authored map(s) from scene", entities.len());
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dimensions_use_defaults() {
        let scene = SceneData::from_json(r#"{ "maps": [ { "name": "a" }, { "name": "b", "height": 9 } ] }"#)
            .unwrap();
        assert_eq!(scene.maps[0].proxy(), MapProxy::default());
        assert_eq!(scene.maps[1].proxy(), MapProxy::new(DEFAULT_MAP_WIDTH, 9));
    }

    #[test]
    fn test_empty_document_has_no_maps() {
        let scene = SceneData::from_json("{}").unwrap();
        assert!(scene.maps.is_empty());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = SceneData::from_json("{ maps: ").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneData::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn test_spawn_keeps_order_and_labels() {
        let scene = SceneData::from_json(
            r#"{ "maps": [ { "name": "first", "width": 3, "height": 4 }, { "name": "second" } ] }"#,
        )
        .unwrap();
        let mut world = World::new();
        let entities = scene.spawn(&mut world);

        assert_eq!(entities.len(), 2);
        assert_eq!(world.get::<MapLabel>(entities[0]).unwrap().0, "first");
        assert_eq!(*world.get::<MapProxy>(entities[0]).unwrap(), MapProxy::new(3, 4));
        assert_eq!(world.get::<MapLabel>(entities[1]).unwrap().0, "second");
        assert_eq!(*world.get::<MapOrder>(entities[0]).unwrap(), MapOrder(0));
        assert_eq!(*world.get::<MapOrder>(entities[1]).unwrap(), MapOrder(1));
    }
}
