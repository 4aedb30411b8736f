//! Map systems.
//!
//! Submodules overview
//! - [`gizmos`] – clear and queue per-frame debug shapes
//! - [`mapconversion`] – convert newly authored maps into runtime data

pub mod gizmos;
pub mod mapconversion;
