//! Notification emitted after an authored map has been converted.
//!
//! The [`map_conversion_system`](crate::systems::mapconversion::map_conversion_system)
//! triggers a [`MapConvertedEvent`] for every proxy it turns into runtime
//! data. Observers can use it to kick off map generation for that entity.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::IVec2;
use log::info;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MapConvertedEvent {
    pub entity: Entity,
    pub size: IVec2,
}

/// Observer that logs each converted map.
pub fn map_converted_observer(trigger: On<MapConvertedEvent>) {
    let event = trigger.event();
    info!(
        "Map {:?} converted: {}x{} tiles",
        event.entity, event.size.x, event.size.y
    );
}
