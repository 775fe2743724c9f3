//! Paint model shared between the scene graph and the mesh renderer.
//!
//! Materials are flat, unlit colors; there is no texture or gradient support.

pub mod color;

pub use color::{Color, ColorParseError};
