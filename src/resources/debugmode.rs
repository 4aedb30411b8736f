//! Debug toggle resource.
//!
//! The mere presence of this resource enables map gizmos. Remove it to stop
//! drawing them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, gizmo systems draw debug shapes.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
