// hexagon-activity/src/platform/android/mod.rs
//
//! The Android native activity: entry point, native windows and the asset bundle.

pub mod assets;
pub mod widget;

mod activity;
