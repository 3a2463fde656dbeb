// hexagon-activity/src/error.rs
//
//! Various errors that methods can produce.

use crate::shader::ShaderKind;

use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Debug)]
pub enum Error {
    /// The named asset does not exist in the asset bundle.
    MissingAsset(String),
    /// The named asset exists but couldn't be read.
    AssetReadFailed(String),
    /// The named shader asset is not valid UTF-8.
    InvalidShaderSource(String),
    /// The driver rejected a shader. Carries the driver's diagnostics, or a generic message if
    /// the driver reported none.
    ShaderCompileFailed {
        /// The stage that failed.
        kind: ShaderKind,
        /// The info log.
        log: String,
    },
    /// The driver couldn't link a program. Carries the driver's diagnostics, or a generic message
    /// if the driver reported none.
    ProgramLinkFailed(String),
    /// The linked program has no active vertex attribute with this name.
    AttributeNotFound(String),
    /// The driver couldn't allocate a GL object.
    GLObjectCreationFailed(String),
    /// A draw call raised a GL error.
    DrawFailed(WindowingApiError),
    /// The system EGL library couldn't be located.
    NoGLLibraryFound,
    /// There is no default EGL display.
    NoDisplay,
    /// The display connection couldn't be initialized.
    DeviceOpenFailed(WindowingApiError),
    /// The display connection couldn't be terminated.
    DeviceDestructionFailed(WindowingApiError),
    /// Choosing an EGL config failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// No EGL config matches the requested attributes.
    NoPixelFormatFound,
    /// The native window rejected the buffer format of the chosen config.
    WindowGeometryFailed(i32),
    /// The system couldn't create a window surface.
    SurfaceCreationFailed(WindowingApiError),
    /// The size of a surface couldn't be queried.
    SurfaceQueryFailed(WindowingApiError),
    /// The system couldn't destroy a surface.
    SurfaceDestructionFailed(WindowingApiError),
    /// The system couldn't create an OpenGL ES context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't destroy an OpenGL ES context.
    ContextDestructionFailed(WindowingApiError),
    /// The system couldn't make the context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// The system couldn't present a window surface.
    PresentFailed(WindowingApiError),
    /// Rendering was requested, but no window is attached.
    NoWidgetAttached,
}

impl Error {
    /// Whether the application can't meaningfully continue after this error.
    ///
    /// A missing shader asset means the package itself is broken; nothing the application does
    /// later will make the asset appear.
    pub fn is_fatal(&self) -> bool {
        matches!(*self, Error::MissingAsset(_))
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::MissingAsset(ref path) => write!(formatter, "missing asset `{}`", path),
            Error::AssetReadFailed(ref path) => write!(formatter, "failed to read asset `{}`", path),
            Error::InvalidShaderSource(ref path) => {
                write!(formatter, "shader source `{}` is not valid UTF-8", path)
            }
            Error::ShaderCompileFailed { kind, ref log } => {
                write!(formatter, "{:?} shader compile error:\n{}", kind, log)
            }
            Error::ProgramLinkFailed(ref log) => write!(formatter, "program link error:\n{}", log),
            Error::AttributeNotFound(ref name) => {
                write!(formatter, "no vertex attribute named `{}`", name)
            }
            Error::GLObjectCreationFailed(ref message) => {
                write!(formatter, "GL object creation failed: {}", message)
            }
            Error::DrawFailed(err) => write!(formatter, "draw failed: {:?}", err),
            Error::NoGLLibraryFound => formatter.write_str("libEGL couldn't be loaded"),
            Error::NoDisplay => formatter.write_str("no default EGL display"),
            Error::DeviceOpenFailed(err) => write!(formatter, "eglInitialize failed: {:?}", err),
            Error::DeviceDestructionFailed(err) => {
                write!(formatter, "eglTerminate failed: {:?}", err)
            }
            Error::PixelFormatSelectionFailed(err) => {
                write!(formatter, "eglChooseConfig failed: {:?}", err)
            }
            Error::NoPixelFormatFound => formatter.write_str("no matching EGL config"),
            Error::WindowGeometryFailed(code) => {
                write!(formatter, "ANativeWindow_setBuffersGeometry failed: {}", code)
            }
            Error::SurfaceCreationFailed(err) => {
                write!(formatter, "eglCreateWindowSurface failed: {:?}", err)
            }
            Error::SurfaceQueryFailed(err) => write!(formatter, "eglQuerySurface failed: {:?}", err),
            Error::SurfaceDestructionFailed(err) => {
                write!(formatter, "eglDestroySurface failed: {:?}", err)
            }
            Error::ContextCreationFailed(err) => {
                write!(formatter, "eglCreateContext failed: {:?}", err)
            }
            Error::ContextDestructionFailed(err) => {
                write!(formatter, "eglDestroyContext failed: {:?}", err)
            }
            Error::MakeCurrentFailed(err) => write!(formatter, "eglMakeCurrent failed: {:?}", err),
            Error::PresentFailed(err) => write!(formatter, "eglSwapBuffers failed: {:?}", err),
            Error::NoWidgetAttached => formatter.write_str("no window attached"),
        }
    }
}

impl error::Error for Error {}

/// Abstraction of the errors that EGL and GL return.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// EGL: An unrecognized attribute or attribute value was passed in the attribute list.
    BadAttribute,
    /// EGL: An EGLContext argument does not name a valid EGL rendering context.
    BadContext,
    /// EGL: An EGLDisplay argument does not name a valid EGL display connection.
    BadDisplay,
    /// EGL: Arguments are inconsistent (for example, a valid context requires
    /// buffers not supplied by a valid surface).
    BadMatch,
    /// EGL: EGL failed to allocate resources for the requested operation.
    BadAlloc,
    /// EGL: EGL is not initialized, or could not be initialized, for the
    /// specified EGL display connection.
    NotInitialized,
    /// EGL: EGL cannot access a requested resource (for example a context is
    /// bound in another thread).
    BadAccess,
    /// EGL: The current surface of the calling thread is a window, pixel
    /// buffer or pixmap that is no longer valid.
    BadCurrentSurface,
    /// EGL: An EGLSurface argument does not name a valid surface (window,
    /// pixel buffer or pixmap) configured for GL rendering.
    BadSurface,
    /// EGL: One or more argument values are invalid.
    BadParameter,
    /// GL: Given when a value parameter is not a legal value for that function.
    BadValue,
    /// EGL: A NativePixmapType argument does not refer to a valid native
    /// pixmap.
    BadNativePixmap,
    /// EGL: A NativeWindowType argument does not refer to a valid native
    /// window.
    BadNativeWindow,
    /// EGL: A power management event has occurred. The application must
    /// destroy all contexts and reinitialise OpenGL ES state and objects to
    /// continue rendering.
    ContextLost,
    /// EGL: The EGL configuration is unsupported.
    BadConfig,
    /// GL: Given when an enumeration parameter is not a legal enumeration for that function.
    BadEnumeration,
    /// GL: Given when the set of state for a command is not legal for the parameters given to that
    /// command.
    BadOperation,
    /// GL: There is not enough memory left to execute the command.
    OutOfMemory,
}

impl WindowingApiError {
    pub(crate) fn from_gl_error(gl_error: u32) -> WindowingApiError {
        match gl_error {
            glow::INVALID_ENUM => WindowingApiError::BadEnumeration,
            glow::INVALID_VALUE => WindowingApiError::BadValue,
            glow::INVALID_OPERATION => WindowingApiError::BadOperation,
            glow::OUT_OF_MEMORY => WindowingApiError::OutOfMemory,
            _ => WindowingApiError::Failed,
        }
    }
}
