//! ECS components for map entities.
//!
//! Submodules overview:
//! - [`mapdata`] – converted map dimensions with a derived size vector
//! - [`maplabel`] – scene name of an authored map
//! - [`maporder`] – position of an authored map in its scene
//! - [`mapproxy`] – authored width/height waiting to be converted
//! - [`maptiles`] – ordered tile buffer owned by the map entity

pub mod mapdata;
pub mod maplabel;
pub mod maporder;
pub mod mapproxy;
pub mod maptiles;
