//! Authoring-to-runtime conversion.
//!
//! Conversion takes an authored object (a [`MapProxy`]) and attaches its
//! runtime data to an entity. The destination is abstracted behind
//! [`WorldBuilder`] so the binding logic does not care whether it writes
//! straight into a [`World`] or queues work through [`Commands`], and so it
//! can be checked against a recording builder in tests.

use bevy_ecs::prelude::*;
use log::debug;
use thiserror::Error;

use crate::components::mapdata::MapData;
use crate::components::mapproxy::MapProxy;
use crate::components::maptiles::MapTiles;

/// Reasons a conversion can fail. Nothing is attached when one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },
    #[error("entity {0} does not exist")]
    MissingEntity(Entity),
}

/// Destination of a conversion: something that can attach data to entities.
pub trait WorldBuilder {
    /// Attach `data` to `entity`, replacing any previous value of that type.
    fn attach_component<C: Component>(
        &mut self,
        entity: Entity,
        data: C,
    ) -> Result<(), ConversionError>;

    /// Attach a fresh, empty container of type `T` to `entity`.
    fn attach_container<T: Component + Default>(
        &mut self,
        entity: Entity,
    ) -> Result<(), ConversionError> {
        self.attach_component(entity, T::default())
    }
}

impl WorldBuilder for World {
    fn attach_component<C: Component>(
        &mut self,
        entity: Entity,
        data: C,
    ) -> Result<(), ConversionError> {
        let mut entity_mut = self
            .get_entity_mut(entity)
            .map_err(|_| ConversionError::MissingEntity(entity))?;
        entity_mut.insert(data);
        Ok(())
    }
}

impl WorldBuilder for Commands<'_, '_> {
    fn attach_component<C: Component>(
        &mut self,
        entity: Entity,
        data: C,
    ) -> Result<(), ConversionError> {
        let mut entity_commands = self
            .get_entity(entity)
            .map_err(|_| ConversionError::MissingEntity(entity))?;
        entity_commands.insert(data);
        Ok(())
    }
}

/// Authored data that knows how to write itself onto an entity.
pub trait ConvertToEntity {
    fn convert<B: WorldBuilder>(
        &self,
        entity: Entity,
        dst: &mut B,
    ) -> Result<(), ConversionError>;
}

impl MapProxy {
    /// Check the authored dimensions. Both must be strictly positive.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConversionError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl ConvertToEntity for MapProxy {
    fn convert<B: WorldBuilder>(
        &self,
        entity: Entity,
        dst: &mut B,
    ) -> Result<(), ConversionError> {
        self.validate()?;
        dst.attach_component(entity, MapData::new(self.width, self.height))?;
        dst.attach_container::<MapTiles>(entity)?;
        debug!(
            "Converted map proxy on {:?} into {}x{} MapData",
            entity, self.width, self.height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::type_name;

    /// Builder that only records what would have been attached.
    #[derive(Default)]
    struct RecordingBuilder {
        attached: Vec<(Entity, &'static str)>,
        map_data: Option<MapData>,
    }

    impl WorldBuilder for RecordingBuilder {
        fn attach_component<C: Component>(
            &mut self,
            entity: Entity,
            data: C,
        ) -> Result<(), ConversionError> {
            let any: &dyn std::any::Any = &data;
            if let Some(m) = any.downcast_ref::<MapData>() {
                self.map_data = Some(*m);
            }
            self.attached.push((entity, type_name::<C>()));
            Ok(())
        }
    }

    #[test]
    fn test_convert_records_data_then_container() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut builder = RecordingBuilder::default();

        MapProxy::new(80, 50).convert(entity, &mut builder).unwrap();

        assert_eq!(builder.attached.len(), 2);
        assert_eq!(builder.attached[0], (entity, type_name::<MapData>()));
        assert_eq!(builder.attached[1], (entity, type_name::<MapTiles>()));
        assert_eq!(builder.map_data, Some(MapData::new(80, 50)));
    }

    #[test]
    fn test_non_positive_dimensions_attach_nothing() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        for (w, h) in [(0, 50), (80, 0), (-1, 10), (10, -3)] {
            let mut builder = RecordingBuilder::default();
            let err = MapProxy::new(w, h).convert(entity, &mut builder).unwrap_err();
            assert_eq!(
                err,
                ConversionError::NonPositiveDimensions {
                    width: w,
                    height: h
                }
            );
            assert!(builder.attached.is_empty());
        }
    }

    #[test]
    fn test_convert_into_world() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        MapProxy::new(12, 9).convert(entity, &mut world).unwrap();

        let data = world.get::<MapData>(entity).unwrap();
        assert_eq!(data.size(), glam::IVec2::new(12, 9));
        assert!(world.get::<MapTiles>(entity).unwrap().is_empty());
    }

    #[test]
    fn test_convert_into_despawned_entity_fails() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        world.despawn(entity);

        let err = MapProxy::default().convert(entity, &mut world).unwrap_err();
        assert_eq!(err, ConversionError::MissingEntity(entity));
    }

    #[test]
    fn test_error_messages() {
        let err = ConversionError::NonPositiveDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(err.to_string(), "map dimensions must be positive, got 0x5");
    }
}
