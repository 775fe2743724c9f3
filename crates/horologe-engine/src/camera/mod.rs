//! Perspective camera and pointer-driven trackball controls.

mod perspective;
mod trackball;

pub use perspective::PerspectiveCamera;
pub use trackball::TrackballControls;
