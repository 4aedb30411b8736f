//! Event types and observers.
//!
//! Submodules:
//! - [`mapconverted`] – emitted once per converted map entity
//! - [`switchdebug`] – toggle map gizmos on/off
pub mod mapconverted;
pub mod switchdebug;
