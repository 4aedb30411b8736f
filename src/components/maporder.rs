use bevy_ecs::prelude::Component;

/// Position of an authored map in its scene. Reports list maps by it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MapOrder(pub usize);
