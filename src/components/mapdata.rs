//! Runtime map dimensions component.
//!
//! [`MapData`] is attached to an entity by the conversion step (see
//! [`crate::conversion`]) and is never mutated afterwards. The grid size is
//! derived from the two stored integers on every read.

use bevy_ecs::prelude::Component;
use glam::IVec2;
use serde::Serialize;

/// Extent of a tile grid, in tiles.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MapData {
    pub width: i32,
    pub height: i32,
}

impl MapData {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grid size as a vector. Always `(width, height)`.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}
