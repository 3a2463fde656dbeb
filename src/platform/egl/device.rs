// hexagon-activity/src/platform/egl/device.rs
//
//! A connection to the default EGL display.

use crate::egl;
use crate::egl::types::EGLDisplay;
use crate::Error;
use super::error::ToWindowingApiError;
use super::functions::EglFunctions;

use std::rc::Rc;
use std::thread;

/// An initialized connection to the default EGL display.
///
/// Devices must be destroyed explicitly with `destroy()`, which terminates the display.
pub struct Device<E>
where
    E: EglFunctions,
{
    pub(crate) egl: Rc<E>,
    pub(crate) egl_display: EGLDisplay,
}

impl<E> Drop for Device<E>
where
    E: EglFunctions,
{
    fn drop(&mut self) {
        if !self.is_destroyed() && !thread::panicking() {
            panic!("Devices must be destroyed explicitly with `destroy`!")
        }
    }
}

impl<E> Device<E>
where
    E: EglFunctions,
{
    /// Opens and initializes the default display.
    pub fn new(egl: Rc<E>) -> Result<Device<E>, Error> {
        unsafe {
            let egl_display = egl.get_display(egl::DEFAULT_DISPLAY);
            if egl_display == egl::NO_DISPLAY {
                return Err(Error::NoDisplay);
            }

            let (mut major_version, mut minor_version) = (0, 0);
            let result = egl.initialize(egl_display, &mut major_version, &mut minor_version);
            if result == egl::FALSE {
                let err = egl.get_error().to_windowing_api_error();
                return Err(Error::DeviceOpenFailed(err));
            }

            info!("initialized EGL {}.{}", major_version, minor_version);
            Ok(Device { egl, egl_display })
        }
    }

    #[inline]
    pub fn egl_display(&self) -> EGLDisplay {
        debug_assert!(!self.is_destroyed());
        self.egl_display
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.egl_display == egl::NO_DISPLAY
    }

    #[inline]
    pub fn egl_functions(&self) -> &E {
        &self.egl
    }

    /// Terminates the display. Contexts and surfaces created from it must be destroyed first.
    pub fn destroy(&mut self) -> Result<(), Error> {
        if self.is_destroyed() {
            return Ok(());
        }

        unsafe {
            let result = self.egl.terminate(self.egl_display);
            self.egl_display = egl::NO_DISPLAY;
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::DeviceDestructionFailed(err));
            }
        }

        Ok(())
    }
}
