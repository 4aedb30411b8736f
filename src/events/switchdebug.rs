//! Debug toggle for map gizmos.
//!
//! Each [`SwitchDebugEvent`] flips debug mode: the observer inserts
//! [`DebugMode`] when it is missing and removes it when it is there. The
//! change goes through `Commands`, so it becomes visible after the next
//! world flush (the binary gets that from running the frame schedule).
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Map gizmos off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Map gizmos on");
        }
    }
}
