// hexagon-activity/src/platform/egl/mod.rs
//
//! Window surfaces and OpenGL ES contexts through EGL.

pub mod context;
pub mod device;
pub mod functions;
pub mod surface;

pub(crate) mod error;
