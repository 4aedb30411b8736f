//! Debug gizmo geometry for maps.
//!
//! [`compute_debug_box`] is the whole of the gizmo logic: it turns a map's
//! width/height into a wireframe box description. Drawing is delegated to a
//! [`GizmoDrawer`], so the geometry can be checked without any renderer.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::components::mapproxy::MapProxy;

/// Linear RGBA color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GizmoColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl GizmoColor {
    pub const BLUE: GizmoColor = GizmoColor::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A wireframe box in the map entity's local space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DebugBox {
    pub center: Vec3,
    pub size: Vec3,
    pub color: GizmoColor,
}

/// Compute the debug box for a `width` x `height` map.
///
/// The map rectangle is shifted by half its extent so the box is centered on
/// the local origin instead of hanging off its corner. Depth is one unit.
pub fn compute_debug_box(width: i32, height: i32) -> DebugBox {
    let extent = Vec2::new(width as f32, height as f32);
    let corner = -extent * 0.5;
    let center = corner + extent * 0.5;

    DebugBox {
        center: center.extend(0.0),
        size: extent.extend(1.0),
        color: GizmoColor::BLUE,
    }
}

/// Sink for immediate-mode debug shapes.
pub trait GizmoDrawer {
    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3, color: GizmoColor);
}

/// Draw the gizmo of an authored map.
pub fn draw_map_gizmo<D: GizmoDrawer + ?Sized>(proxy: &MapProxy, drawer: &mut D) {
    let b = compute_debug_box(proxy.width, proxy.height);
    drawer.draw_wire_cube(b.center, b.size, b.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(Vec3, Vec3, GizmoColor)>);

    impl GizmoDrawer for Recorder {
        fn draw_wire_cube(&mut self, center: Vec3, size: Vec3, color: GizmoColor) {
            self.0.push((center, size, color));
        }
    }

    #[test]
    fn test_default_map_box() {
        let b = compute_debug_box(80, 50);
        assert_eq!(b.size, Vec3::new(80.0, 50.0, 1.0));
        assert_eq!(b.center, Vec3::ZERO);
        assert_eq!(b.color, GizmoColor::BLUE);
    }

    #[test]
    fn test_odd_sizes_stay_centered() {
        let b = compute_debug_box(7, 3);
        assert_eq!(b.center, Vec3::ZERO);
        assert_eq!(b.size, Vec3::new(7.0, 3.0, 1.0));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = compute_debug_box(80, 50);
        for _ in 0..5 {
            assert_eq!(compute_debug_box(80, 50), first);
        }
    }

    #[test]
    fn test_draw_map_gizmo_forwards_one_cube() {
        let mut rec = Recorder::default();
        draw_map_gizmo(&MapProxy::default(), &mut rec);
        draw_map_gizmo(&MapProxy::default(), &mut rec);

        assert_eq!(rec.0.len(), 2);
        assert_eq!(rec.0[0], rec.0[1]);
        assert_eq!(rec.0[0].1, Vec3::new(80.0, 50.0, 1.0));
        assert_eq!(rec.0[0].2, GizmoColor::BLUE);
    }
}
