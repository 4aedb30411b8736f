//! ECS resources made available to systems.
//!
//! Overview
//! - `conversionfailures` – authored objects that failed to convert
//! - `debuggizmos` – wire cubes queued for the current frame
//! - `debugmode` – presence enables gizmo drawing
//! - `mapconfig` – INI-backed defaults for authored maps
pub mod conversionfailures;
pub mod debuggizmos;
pub mod debugmode;
pub mod mapconfig;
