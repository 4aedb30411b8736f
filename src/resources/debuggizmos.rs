//! Per-frame store of debug shapes.
//!
//! [`DebugGizmos`] is an in-memory [`GizmoDrawer`]: systems push wire cubes
//! into it and whatever presents the frame reads them back. It is cleared at
//! the start of every frame by
//! [`clear_gizmos`](crate::systems::gizmos::clear_gizmos), so shapes never
//! pile up across frames.

use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::Serialize;

use crate::gizmo::{GizmoColor, GizmoDrawer};

/// One wireframe cube queued for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WireCube {
    pub center: Vec3,
    pub size: Vec3,
    pub color: GizmoColor,
}

#[derive(Resource, Debug, Default)]
pub struct DebugGizmos {
    cubes: Vec<WireCube>,
}

impl DebugGizmos {
    pub fn cubes(&self) -> &[WireCube] {
        &self.cubes
    }

    pub fn clear(&mut self) {
        self.cubes.clear();
    }
}

impl GizmoDrawer for DebugGizmos {
    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3, color: GizmoColor) {
        self.cubes.push(WireCube {
            center,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_then_clear() {
        let mut g = DebugGizmos::default();
        g.draw_wire_cube(Vec3::ZERO, Vec3::ONE, GizmoColor::BLUE);
        assert_eq!(g.cubes().len(), 1);
        assert_eq!(g.cubes()[0].size, Vec3::ONE);

        g.clear();
        assert!(g.cubes().is_empty());
    }
}
