// hexagon-activity/src/platform/egl/functions.rs
//
//! The EGL entry points, and loading them from the system library.

use crate::egl::types::{EGLBoolean, EGLConfig, EGLContext, EGLDisplay, EGLSurface, EGLint};
use crate::egl::{EGLNativeDisplayType, EGLNativeWindowType, Egl};
use crate::Error;

use libc::{RTLD_LAZY, RTLD_LOCAL, dlopen, dlsym};
use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::ptr;

static EGL_LIBRARY_NAME: &[u8] = b"libEGL.so\0";

/// The EGL 1.4 calls needed to bind a window surface and context.
///
/// This mirrors the C API closely: results are raw EGL handles and booleans, and the caller
/// checks them and fetches `get_error()` on failure. The generated `Egl` function table
/// implements it directly.
///
/// # Safety
///
/// Every handle passed in must have been returned by the same implementation and must not have
/// been destroyed yet.
pub trait EglFunctions {
    unsafe fn get_display(&self, display_id: EGLNativeDisplayType) -> EGLDisplay;
    unsafe fn initialize(&self, display: EGLDisplay, major: &mut EGLint, minor: &mut EGLint)
                         -> EGLBoolean;
    unsafe fn terminate(&self, display: EGLDisplay) -> EGLBoolean;
    /// Fills `configs` with up to `configs.len()` matching configs. With an empty slice, only the
    /// number of matching configs is reported.
    unsafe fn choose_config(&self,
                            display: EGLDisplay,
                            attrib_list: &[EGLint],
                            configs: &mut [EGLConfig],
                            num_config: &mut EGLint)
                            -> EGLBoolean;
    unsafe fn get_config_attrib(&self,
                                display: EGLDisplay,
                                config: EGLConfig,
                                attribute: EGLint,
                                value: &mut EGLint)
                                -> EGLBoolean;
    unsafe fn create_window_surface(&self,
                                    display: EGLDisplay,
                                    config: EGLConfig,
                                    window: EGLNativeWindowType,
                                    attrib_list: &[EGLint])
                                    -> EGLSurface;
    unsafe fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
    unsafe fn query_surface(&self,
                            display: EGLDisplay,
                            surface: EGLSurface,
                            attribute: EGLint,
                            value: &mut EGLint)
                            -> EGLBoolean;
    unsafe fn create_context(&self,
                             display: EGLDisplay,
                             config: EGLConfig,
                             share_context: EGLContext,
                             attrib_list: &[EGLint])
                             -> EGLContext;
    unsafe fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> EGLBoolean;
    unsafe fn make_current(&self,
                           display: EGLDisplay,
                           draw: EGLSurface,
                           read: EGLSurface,
                           context: EGLContext)
                           -> EGLBoolean;
    unsafe fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
    fn get_error(&self) -> EGLint;
    /// Looks up a client API (here: OpenGL ES) entry point.
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void;
}

impl EglFunctions for Egl {
    #[inline]
    unsafe fn get_display(&self, display_id: EGLNativeDisplayType) -> EGLDisplay {
        self.GetDisplay(display_id)
    }

    #[inline]
    unsafe fn initialize(&self, display: EGLDisplay, major: &mut EGLint, minor: &mut EGLint)
                         -> EGLBoolean {
        self.Initialize(display, major, minor)
    }

    #[inline]
    unsafe fn terminate(&self, display: EGLDisplay) -> EGLBoolean {
        self.Terminate(display)
    }

    unsafe fn choose_config(&self,
                            display: EGLDisplay,
                            attrib_list: &[EGLint],
                            configs: &mut [EGLConfig],
                            num_config: &mut EGLint)
                            -> EGLBoolean {
        let configs_ptr = if configs.is_empty() { ptr::null_mut() } else { configs.as_mut_ptr() };
        self.ChooseConfig(display,
                          attrib_list.as_ptr(),
                          configs_ptr,
                          configs.len() as EGLint,
                          num_config)
    }

    #[inline]
    unsafe fn get_config_attrib(&self,
                                display: EGLDisplay,
                                config: EGLConfig,
                                attribute: EGLint,
                                value: &mut EGLint)
                                -> EGLBoolean {
        self.GetConfigAttrib(display, config, attribute, value)
    }

    #[inline]
    unsafe fn create_window_surface(&self,
                                    display: EGLDisplay,
                                    config: EGLConfig,
                                    window: EGLNativeWindowType,
                                    attrib_list: &[EGLint])
                                    -> EGLSurface {
        self.CreateWindowSurface(display, config, window, attrib_list.as_ptr())
    }

    #[inline]
    unsafe fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        self.DestroySurface(display, surface)
    }

    #[inline]
    unsafe fn query_surface(&self,
                            display: EGLDisplay,
                            surface: EGLSurface,
                            attribute: EGLint,
                            value: &mut EGLint)
                            -> EGLBoolean {
        self.QuerySurface(display, surface, attribute, value)
    }

    #[inline]
    unsafe fn create_context(&self,
                             display: EGLDisplay,
                             config: EGLConfig,
                             share_context: EGLContext,
                             attrib_list: &[EGLint])
                             -> EGLContext {
        self.CreateContext(display, config, share_context, attrib_list.as_ptr())
    }

    #[inline]
    unsafe fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> EGLBoolean {
        self.DestroyContext(display, context)
    }

    #[inline]
    unsafe fn make_current(&self,
                           display: EGLDisplay,
                           draw: EGLSurface,
                           read: EGLSurface,
                           context: EGLContext)
                           -> EGLBoolean {
        self.MakeCurrent(display, draw, read, context)
    }

    #[inline]
    unsafe fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        self.SwapBuffers(display, surface)
    }

    #[inline]
    fn get_error(&self) -> EGLint {
        unsafe { self.GetError() }
    }

    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe { self.GetProcAddress(symbol_name.as_ptr() as *const c_char) as *const c_void }
    }
}

/// Opens the system EGL library and resolves every EGL entry point from it.
///
/// The library handle is never closed; it stays loaded for the life of the process.
pub fn load_egl_library() -> Result<Egl, Error> {
    unsafe {
        let library = dlopen(EGL_LIBRARY_NAME.as_ptr() as *const c_char, RTLD_LAZY | RTLD_LOCAL);
        if library.is_null() {
            return Err(Error::NoGLLibraryFound);
        }

        Ok(Egl::load_with(|symbol_name| {
            match CString::new(symbol_name) {
                Ok(symbol_name) => dlsym(library, symbol_name.as_ptr()) as *const c_void,
                Err(_) => ptr::null(),
            }
        }))
    }
}
