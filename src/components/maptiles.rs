//! Tile buffer component.
//!
//! [`MapTiles`] is an ordered list of [`TileType`] records owned by the map
//! entity. Conversion only allocates it; filling it is left to whatever map
//! generator runs later.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Kind of a single map cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Floor,
    Wall,
}

/// Ordered tile storage attached next to [`MapData`](super::mapdata::MapData).
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct MapTiles(pub Vec<TileType>);

impl Deref for MapTiles {
    type Target = Vec<TileType>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MapTiles {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
