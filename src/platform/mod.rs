// hexagon-activity/src/platform/mod.rs
//
//! Platform-specific backends.

pub mod egl;

#[cfg(android)]
pub mod android;
