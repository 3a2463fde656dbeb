// hexagon-activity/src/context.rs
//
//! Declarations describing the context that is requested from EGL.

use crate::info::GLVersion;

use bitflags::bitflags;

bitflags! {
    /// Optional buffers to request alongside the 8-bit RGB color buffer.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ContextAttributeFlags: u8 {
        const ALPHA   = 0x01;
        const DEPTH   = 0x02;
        const STENCIL = 0x04;
    }
}

/// Attributes used to choose an EGL config and create a context from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    pub version: GLVersion,
    pub flags: ContextAttributeFlags,
}

impl Default for ContextAttributes {
    /// An OpenGL ES 2.0 context with no alpha, depth or stencil buffer.
    fn default() -> ContextAttributes {
        ContextAttributes { version: GLVersion::new(2, 0), flags: ContextAttributeFlags::empty() }
    }
}
