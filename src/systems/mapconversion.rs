//! Map conversion system.
//!
//! The [`map_conversion_system`] picks up every newly added [`MapProxy`] and
//! converts it through the [`WorldBuilder`](crate::conversion::WorldBuilder)
//! implementation for [`Commands`]. Successful conversions trigger a
//! [`MapConvertedEvent`]; failures are logged and recorded in
//! [`ConversionFailures`].

use bevy_ecs::prelude::*;
use log::error;

use crate::components::mapproxy::MapProxy;
use crate::conversion::ConvertToEntity;
use crate::events::mapconverted::MapConvertedEvent;
use crate::resources::conversionfailures::ConversionFailures;

/// Convert authored maps into `MapData` and an empty `MapTiles`.
pub fn map_conversion_system(
    mut commands: Commands,
    query: Query<(Entity, &MapProxy), Added<MapProxy>>,
    mut failures: ResMut<ConversionFailures>,
) {
    for (entity, proxy) in query.iter() {
        match proxy.convert(entity, &mut commands) {
            Ok(()) => {
                commands.trigger(MapConvertedEvent {
                    entity,
                    size: glam::IVec2::new(proxy.width, proxy.height),
                });
            }
            Err(err) => {
                error!("Failed to convert map proxy on {:?}: {}", entity, err);
                failures.failures.push((entity, err));
            }
        }
    }
}
