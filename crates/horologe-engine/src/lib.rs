//! Horologe engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the clock layer: window
//! loop, input, timing, a flat 3D scene graph, primitive geometry, a
//! perspective camera with trackball controls and an instanced mesh renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod paint;
pub mod geometry;
pub mod scene;
pub mod camera;
pub mod render;
