//! World and schedule setup.
//!
//! [`setup_world`] inserts the resources and observers the map systems rely
//! on. [`frame_schedule`] returns the per-frame system order:
//!
//! 1. [`clear_gizmos`] – drop last frame's debug shapes
//! 2. [`map_conversion_system`] – convert newly authored maps
//! 3. [`map_gizmo_system`] – queue debug boxes when debug mode is on

use bevy_ecs::prelude::*;

use crate::events::mapconverted::map_converted_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::conversionfailures::ConversionFailures;
use crate::resources::debuggizmos::DebugGizmos;
use crate::systems::gizmos::{clear_gizmos, map_gizmo_system};
use crate::systems::mapconversion::map_conversion_system;

pub fn setup_world(world: &mut World) {
    world.init_resource::<ConversionFailures>();
    world.init_resource::<DebugGizmos>();
    world.add_observer(map_converted_observer);
    world.add_observer(switch_debug_observer);
    world.flush();
}

pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((clear_gizmos, map_conversion_system, map_gizmo_system).chain());
    schedule
}
