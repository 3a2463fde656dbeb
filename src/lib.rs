//! An Android native activity that draws a static figure with EGL and OpenGL ES 2.
//!
//! When the platform hands the activity a window, the application opens the default EGL
//! display, picks an 8-bit RGB configuration renderable with OpenGL ES 2, binds a window surface
//! and context, compiles a shader pair read from the asset bundle and draws six vertices (two
//! triangles) once. Every EGL and GL object is released again when the window goes away.
//!
//! The GPU drivers sit behind the [`EglFunctions`] and [`Gles`] traits, so the whole sequence
//! can be exercised off-device.

#[macro_use]
extern crate log;

pub mod platform;
pub use platform::egl::context::{Context, ContextDescriptor};
pub use platform::egl::device::Device;
pub use platform::egl::functions::EglFunctions;
pub use platform::egl::surface::{NativeWidget, Surface};

pub mod error;
pub use crate::error::{Error, WindowingApiError};

mod application;
pub use crate::application::{ApplicationData, GlLoader};

mod config;
pub use crate::config::AppConfig;

mod context;
pub use crate::context::{ContextAttributeFlags, ContextAttributes};

mod gles;
pub use crate::gles::Gles;

mod info;
pub use crate::info::GLVersion;

mod lifecycle;
pub use crate::lifecycle::{AppState, LifecycleEvent};

mod program;
pub use crate::program::Program;

mod renderer;
pub use crate::renderer::{Renderer, VERTEX_COUNT, VERTICES};

mod resources;
pub use crate::resources::{FilesystemResourceLoader, ResourceLoader};

mod shader;
pub use crate::shader::{Shader, ShaderKind};

#[allow(non_camel_case_types)]
#[allow(clippy::all)]
pub mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

#[cfg(test)]
mod tests;
