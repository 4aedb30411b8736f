//! Gizmo systems.
//!
//! [`clear_gizmos`] empties [`DebugGizmos`] at the start of a frame and
//! [`map_gizmo_system`] queues one wire cube per authored map while
//! [`DebugMode`] is present. Maps whose dimensions fail validation are not
//! drawn, matching the conversion step that rejects them.

use bevy_ecs::prelude::*;

use crate::components::mapproxy::MapProxy;
use crate::gizmo::draw_map_gizmo;
use crate::resources::debuggizmos::DebugGizmos;
use crate::resources::debugmode::DebugMode;

pub fn clear_gizmos(mut gizmos: ResMut<DebugGizmos>) {
    gizmos.clear();
}

/// Queue the debug box of every [`MapProxy`] into [`DebugGizmos`].
pub fn map_gizmo_system(
    debug_mode: Option<Res<DebugMode>>,
    mut gizmos: ResMut<DebugGizmos>,
    query: Query<&MapProxy>,
) {
    if debug_mode.is_none() {
        return;
    }
    for proxy in query.iter().filter(|p| p.validate().is_ok()) {
        draw_map_gizmo(proxy, &mut *gizmos);
    }
}
