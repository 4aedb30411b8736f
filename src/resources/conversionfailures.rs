//! Record of authored objects that could not be converted.

use bevy_ecs::prelude::*;

use crate::conversion::ConversionError;

/// Failures collected by the conversion system, in the order they happened.
#[derive(Resource, Debug, Default)]
pub struct ConversionFailures {
    pub failures: Vec<(Entity, ConversionError)>,
}

impl ConversionFailures {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}
