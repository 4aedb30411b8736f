//! Summary of converted maps, printed by the binary as JSON.

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::mapdata::MapData;
use crate::components::maplabel::MapLabel;
use crate::components::maporder::MapOrder;
use crate::components::maptiles::MapTiles;
use crate::gizmo::{DebugBox, compute_debug_box};
use crate::resources::debugmode::DebugMode;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MapReport {
    pub name: Option<String>,
    pub width: i32,
    pub height: i32,
    pub tiles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_box: Option<DebugBox>,
}

/// Describe every converted map in [`MapOrder`]. Maps without an order
/// come last.
///
/// The debug box is only included while [`DebugMode`] is present.
pub fn collect_report(world: &mut World) -> Vec<MapReport> {
    let with_gizmos = world.contains_resource::<DebugMode>();
    let mut query =
        world.query::<(&MapData, &MapTiles, Option<&MapLabel>, Option<&MapOrder>)>();

    let mut rows: Vec<(usize, MapReport)> = query
        .iter(world)
        .map(|(data, tiles, label, order)| {
            (
                order.map_or(usize::MAX, |o| o.0),
                MapReport {
                    name: label.map(|l| l.0.clone()),
                    width: data.width,
                    height: data.height,
                    tiles: tiles.len(),
                    debug_box: with_gizmos.then(|| compute_debug_box(data.width, data.height)),
                },
            )
        })
        .collect();
    rows.sort_by_key(|(order, _)| *order);
    rows.into_iter().map(|(_, report)| report).collect()
}
