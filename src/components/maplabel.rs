use bevy_ecs::prelude::Component;

/// Human-readable name of an authored map, as given in the scene file.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct MapLabel(pub String);

impl MapLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
