//! Map proxy library.
//!
//! Converts authored map settings (width/height) into ECS entities carrying
//! [`MapData`](components::mapdata::MapData) and an empty
//! [`MapTiles`](components::maptiles::MapTiles) buffer, and describes the
//! debug gizmo for each map.

pub mod components;
pub mod conversion;
pub mod events;
pub mod gizmo;
pub mod report;
pub mod resources;
pub mod scene;
pub mod setup;
pub mod systems;
