// hexagon-activity/src/platform/android/widget.rs
//
//! Native windows handed out by the activity.

use crate::egl::types::EGLint;
use crate::egl::EGLNativeWindowType;
use crate::platform::egl::surface::NativeWidget;
use crate::Error;

use ndk::hardware_buffer_format::HardwareBufferFormat;
use ndk::native_window::NativeWindow;
use std::os::raw::c_void;

/// An `ANativeWindow`, retained for as long as the widget lives.
pub struct AndroidWidget {
    native_window: NativeWindow,
}

impl AndroidWidget {
    #[inline]
    pub fn new(native_window: NativeWindow) -> AndroidWidget {
        AndroidWidget { native_window }
    }

    #[inline]
    pub fn native_window(&self) -> &NativeWindow {
        &self.native_window
    }
}

impl NativeWidget for AndroidWidget {
    #[inline]
    fn egl_native_window(&self) -> EGLNativeWindowType {
        self.native_window.ptr().as_ptr() as *const c_void
    }

    fn set_buffers_format(&self, format: EGLint) -> Result<(), Error> {
        // A width and height of zero keep the window's own size.
        self.native_window
            .set_buffers_geometry(0, 0, Some(HardwareBufferFormat::from(format as u32)))
            .map_err(|err| Error::WindowGeometryFailed(err.raw_os_error().unwrap_or(-1)))
    }
}
