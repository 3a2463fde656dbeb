// hexagon-activity/src/platform/egl/context.rs
//
//! Choosing EGL configs and managing OpenGL ES contexts.

use crate::egl;
use crate::egl::types::{EGLConfig, EGLContext, EGLint};
use crate::{ContextAttributeFlags, ContextAttributes, Error};
use super::device::Device;
use super::error::ToWindowingApiError;
use super::functions::EglFunctions;
use super::surface::Surface;

use std::ptr;
use std::thread;

const RGB_CHANNEL_BIT_DEPTH: EGLint = 8;

/// The EGL config chosen for a set of context attributes.
#[derive(Clone, Debug)]
pub struct ContextDescriptor {
    pub(crate) egl_config: EGLConfig,
    pub(crate) egl_context_client_version: EGLint,
    pub(crate) native_visual_id: EGLint,
}

impl ContextDescriptor {
    /// The native pixel format of the config, which the window's buffers must use.
    #[inline]
    pub fn native_visual_id(&self) -> EGLint {
        self.native_visual_id
    }

    #[inline]
    pub fn client_version(&self) -> EGLint {
        self.egl_context_client_version
    }
}

/// An OpenGL ES context.
///
/// Contexts must be destroyed explicitly with `Device::destroy_context()`.
pub struct Context {
    pub(crate) egl_context: EGLContext,
}

impl Drop for Context {
    #[inline]
    fn drop(&mut self) {
        if !self.is_destroyed() && !thread::panicking() {
            panic!("Contexts must be destroyed explicitly with `destroy_context`!")
        }
    }
}

impl Context {
    #[inline]
    pub fn egl_context(&self) -> EGLContext {
        self.egl_context
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.egl_context == egl::NO_CONTEXT
    }
}

impl<E> Device<E>
where
    E: EglFunctions,
{
    /// Chooses the first config with exactly 8 bits per RGB channel that can render with the
    /// requested OpenGL ES version.
    pub fn create_context_descriptor(&self, attributes: &ContextAttributes)
                                     -> Result<ContextDescriptor, Error> {
        let flags = attributes.flags;
        let renderable_type = if attributes.version.major >= 3 {
            egl::OPENGL_ES3_BIT
        } else {
            egl::OPENGL_ES2_BIT
        };

        let required_config_attributes = [
            egl::BLUE_SIZE as EGLint,   RGB_CHANNEL_BIT_DEPTH,
            egl::GREEN_SIZE as EGLint,  RGB_CHANNEL_BIT_DEPTH,
            egl::RED_SIZE as EGLint,    RGB_CHANNEL_BIT_DEPTH,
        ];

        let mut requested_config_attributes = required_config_attributes.to_vec();
        if flags.contains(ContextAttributeFlags::ALPHA) {
            requested_config_attributes.extend_from_slice(&[egl::ALPHA_SIZE as EGLint, 8]);
        }
        if flags.contains(ContextAttributeFlags::DEPTH) {
            requested_config_attributes.extend_from_slice(&[egl::DEPTH_SIZE as EGLint, 24]);
        }
        if flags.contains(ContextAttributeFlags::STENCIL) {
            requested_config_attributes.extend_from_slice(&[egl::STENCIL_SIZE as EGLint, 8]);
        }
        requested_config_attributes.extend_from_slice(&[
            egl::RENDERABLE_TYPE as EGLint, renderable_type as EGLint,
        ]);
        // Extra zeroes work around implementations that read past `EGL_NONE`.
        requested_config_attributes.extend_from_slice(&[egl::NONE as EGLint, 0, 0, 0]);

        let egl_display = self.egl_display();
        unsafe {
            // See how many applicable configs there are.
            let mut config_count = 0;
            let result = self.egl.choose_config(egl_display,
                                                &requested_config_attributes,
                                                &mut [],
                                                &mut config_count);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::PixelFormatSelectionFailed(err));
            }
            if config_count <= 0 {
                return Err(Error::NoPixelFormatFound);
            }

            // Enumerate all those configs.
            let mut configs = vec![ptr::null(); config_count as usize];
            let mut real_config_count = config_count;
            let result = self.egl.choose_config(egl_display,
                                                &requested_config_attributes,
                                                &mut configs,
                                                &mut real_config_count);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::PixelFormatSelectionFailed(err));
            }
            configs.truncate(real_config_count.max(0) as usize);

            // Sanitize configs.
            let mut egl_config = None;
            for config in configs {
                let mut exact = true;
                for pair in required_config_attributes.chunks(2) {
                    if self.get_config_attr(config, pair[0])? != pair[1] {
                        exact = false;
                        break;
                    }
                }
                if exact {
                    egl_config = Some(config);
                    break;
                }
            }
            let egl_config = match egl_config {
                None => return Err(Error::NoPixelFormatFound),
                Some(egl_config) => egl_config,
            };

            let native_visual_id = self.get_config_attr(egl_config,
                                                        egl::NATIVE_VISUAL_ID as EGLint)?;
            debug!("chose EGL config {:?} with native visual {}", egl_config, native_visual_id);

            Ok(ContextDescriptor {
                egl_config,
                egl_context_client_version: attributes.version.major as EGLint,
                native_visual_id,
            })
        }
    }

    pub fn create_context(&self, descriptor: &ContextDescriptor) -> Result<Context, Error> {
        let egl_context_attributes = [
            egl::CONTEXT_CLIENT_VERSION as EGLint, descriptor.egl_context_client_version,
            egl::NONE as EGLint, 0,
            0, 0,
        ];

        unsafe {
            let egl_context = self.egl.create_context(self.egl_display(),
                                                      descriptor.egl_config,
                                                      egl::NO_CONTEXT,
                                                      &egl_context_attributes);
            if egl_context == egl::NO_CONTEXT {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::ContextCreationFailed(err));
            }

            Ok(Context { egl_context })
        }
    }

    pub fn destroy_context(&self, context: &mut Context) -> Result<(), Error> {
        if context.is_destroyed() {
            return Ok(());
        }

        unsafe {
            let result = self.egl.destroy_context(self.egl_display(), context.egl_context);
            context.egl_context = egl::NO_CONTEXT;
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::ContextDestructionFailed(err));
            }
        }

        Ok(())
    }

    /// Binds `context` to the calling thread, drawing to and reading from `surface`.
    pub fn make_context_current(&self, context: &Context, surface: &Surface)
                                -> Result<(), Error> {
        unsafe {
            let result = self.egl.make_current(self.egl_display(),
                                               surface.egl_surface,
                                               surface.egl_surface,
                                               context.egl_context);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::MakeCurrentFailed(err));
            }
        }

        Ok(())
    }

    pub fn make_no_context_current(&self) -> Result<(), Error> {
        unsafe {
            let result = self.egl.make_current(self.egl_display(),
                                               egl::NO_SURFACE,
                                               egl::NO_SURFACE,
                                               egl::NO_CONTEXT);
            if result == egl::FALSE {
                let err = self.egl.get_error().to_windowing_api_error();
                return Err(Error::MakeCurrentFailed(err));
            }
        }

        Ok(())
    }

    pub(crate) unsafe fn get_config_attr(&self, egl_config: EGLConfig, attr: EGLint)
                                         -> Result<EGLint, Error> {
        let mut value = 0;
        let result = self.egl.get_config_attrib(self.egl_display(), egl_config, attr, &mut value);
        if result == egl::FALSE {
            let err = self.egl.get_error().to_windowing_api_error();
            return Err(Error::PixelFormatSelectionFailed(err));
        }
        Ok(value)
    }
}
