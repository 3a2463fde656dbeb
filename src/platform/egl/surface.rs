// hexagon-activity/src/platform/egl/surface.rs
//
//! Window surfaces.

use crate::egl;
use crate::egl::types::{EGLSurface, EGLint};
use crate::egl::EGLNativeWindowType;
use crate::Error;
use super::context::ContextDescriptor;
use super::device::Device;
use super::error::ToWindowingApiError;
use super::functions::EglFunctions;

use euclid::default::Size2D;
use std::fmt::{self, Debug, Formatter};
use std::thread;

/// A native window that EGL can render into.
pub trait NativeWidget {
    /// The window handle to hand to `eglCreateWindowSurface`.
    fn egl_native_window(&self) -> EGLNativeWindowType;

    /// Switches the window's buffers to the given native pixel format, keeping the window's
    /// size.
    fn set_buffers_format(&self, format: EGLint) -> Result<(), Error>;
}

/// An EGL window surface.
///
/// Surfaces must be destroyed explicitly with `Device::destroy_surface()`.
pub struct Surface {
    pub(crate) egl_surface: EGLSurface,
    pub(crate) size: Size2D<i32>,
}

impl Debug for Surface {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "Surface({:?}, {}x{})", self.egl_surface, self.size.width, self.size.height)
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        if !self.is_destroyed() && !thread::panicking() {
            panic!("Should have destroyed the surface first with `destroy_surface()`!")
        }
    }
}

impl Surface {
    #[inline]
    pub fn egl_surface(&self) -> EGLSurface {
        self.egl_surface
    }

    /// The size EGL reported when the surface was created.
    #[inline]
    pub fn size(&self) -> Size2D<i32> {
        self.size
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.egl_surface == egl::NO_SURFACE
    }
}

impl<E> Device<E>
where
    E: EglFunctions,
{
    /// Creates a surface rendering into `native_widget`.
    ///
    /// The window's buffer format is switched to the config's native visual first; EGL leaves
    /// surface creation undefined when the two disagree.
    pub fn create_window_surface(&self,
                                 descriptor: &ContextDescriptor,
                                 native_widget: &dyn NativeWidget)
                                 -> Result<Surface, Error> {
        native_widget.set_buffers_format(descriptor.native_visual_id)?;

        unsafe {
            let egl_surface = self.egl.create_window_surface(self.egl_display(),
                                                             descriptor.egl_config,
                                                             native_widget.egl_native_window(),
                                                             &[egl::NONE as EGLint]);
            if egl_surface == egl::NO_SURFACE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::SurfaceCreationFailed(err));
            }

            let mut surface = Surface { egl_surface, size: Size2D::zero() };
            match self.query_surface_size(&surface) {
                Ok(size) => surface.size = size,
                Err(err) => {
                    if let Err(destroy_err) = self.destroy_surface(&mut surface) {
                        warn!("failed to destroy unusable surface: {}", destroy_err);
                    }
                    return Err(err);
                }
            }
            Ok(surface)
        }
    }

    pub fn destroy_surface(&self, surface: &mut Surface) -> Result<(), Error> {
        if surface.is_destroyed() {
            return Ok(());
        }

        unsafe {
            let result = self.egl.destroy_surface(self.egl_display(), surface.egl_surface);
            surface.egl_surface = egl::NO_SURFACE;
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::SurfaceDestructionFailed(err));
            }
        }

        Ok(())
    }

    /// Posts the back buffer of `surface` to its window.
    pub fn present_surface(&self, surface: &Surface) -> Result<(), Error> {
        unsafe {
            let result = self.egl.swap_buffers(self.egl_display(), surface.egl_surface);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::PresentFailed(err));
            }
        }

        Ok(())
    }

    fn query_surface_size(&self, surface: &Surface) -> Result<Size2D<i32>, Error> {
        let (mut width, mut height) = (0, 0);
        unsafe {
            let egl_display = self.egl_display();
            let result = self.egl.query_surface(egl_display,
                                                surface.egl_surface,
                                                egl::WIDTH as EGLint,
                                                &mut width);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::SurfaceQueryFailed(err));
            }
            let result = self.egl.query_surface(egl_display,
                                                surface.egl_surface,
                                                egl::HEIGHT as EGLint,
                                                &mut height);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::SurfaceQueryFailed(err));
            }
        }
        Ok(Size2D::new(width, height))
    }
}
