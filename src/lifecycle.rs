// hexagon-activity/src/lifecycle.rs
//
//! The lifecycle events the application reacts to, and the states it moves through.

use crate::platform::egl::surface::NativeWidget;

use std::fmt::{self, Debug, Formatter};

/// A platform lifecycle command, reduced to what the application cares about.
pub enum LifecycleEvent {
    /// A native window is ready to be rendered into.
    WindowAvailable(Box<dyn NativeWidget>),
    /// The native window is about to go away; everything bound to it must be released.
    WindowDestroyed,
    /// The window contents were lost and must be drawn again.
    RedrawNeeded,
    Pause,
    Resume,
    /// The activity is finishing; everything must be released.
    DestroyRequested,
}

impl Debug for LifecycleEvent {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(match *self {
            LifecycleEvent::WindowAvailable(_) => "WindowAvailable",
            LifecycleEvent::WindowDestroyed => "WindowDestroyed",
            LifecycleEvent::RedrawNeeded => "RedrawNeeded",
            LifecycleEvent::Pause => "Pause",
            LifecycleEvent::Resume => "Resume",
            LifecycleEvent::DestroyRequested => "DestroyRequested",
        })
    }
}

/// Where the application is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppState {
    /// No frame has been drawn into the current window, or there is no window.
    Uninitialized,
    /// A surface is bound and the figure has been drawn.
    Rendered,
    /// Paused after rendering; the surface is kept.
    Paused,
    /// Everything has been released. No further event has any effect.
    Destroyed,
}
