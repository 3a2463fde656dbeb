// hexagon-activity/src/shader.rs
//
//! Loading and compiling shaders.

use crate::gles::Gles;
use crate::resources::ResourceLoader;
use crate::Error;

use std::str;
use std::thread;

const NO_DIAGNOSTICS: &str = "no diagnostic information available";

/// A shader stage.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub(crate) fn to_gl(self) -> u32 {
        match self {
            ShaderKind::Vertex => glow::VERTEX_SHADER,
            ShaderKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// A successfully compiled shader object.
///
/// Shaders must be destroyed explicitly with `destroy()`, normally by the `Program` that owns
/// them.
pub struct Shader<G>
where
    G: Gles,
{
    pub(crate) object: G::Shader,
    kind: ShaderKind,
    destroyed: bool,
}

impl<G> Drop for Shader<G>
where
    G: Gles,
{
    fn drop(&mut self) {
        if !self.destroyed && !thread::panicking() {
            panic!("Shaders must be destroyed explicitly with `destroy`!")
        }
    }
}

impl<G> Shader<G>
where
    G: Gles,
{
    /// Reads the whole asset at `path` and compiles it as a shader of the given kind.
    ///
    /// The asset is read before anything is allocated on the GPU, so a missing asset leaves no
    /// shader object behind.
    pub fn from_asset(gl: &G,
                      kind: ShaderKind,
                      resource_loader: &dyn ResourceLoader,
                      path: &str)
                      -> Result<Shader<G>, Error> {
        let mut source = vec![];
        if let Err(err) = resource_loader.slurp(&mut source, path) {
            error!("Failed shader file: {}", path);
            return Err(err);
        }
        let source = match str::from_utf8(&source) {
            Ok(source) => source,
            Err(_) => return Err(Error::InvalidShaderSource(path.to_owned())),
        };
        debug!("compiling {:?} shader `{}` ({} bytes)", kind, path, source.len());
        Shader::new(gl, kind, source)
    }

    /// Compiles `source` as a shader of the given kind.
    ///
    /// On failure the shader object is deleted and the driver's info log is returned in
    /// `Error::ShaderCompileFailed`, after being written to the log.
    pub fn new(gl: &G, kind: ShaderKind, source: &str) -> Result<Shader<G>, Error> {
        let object = gl.create_shader(kind)?;
        gl.shader_source(object, source);
        gl.compile_shader(object);

        if !gl.shader_compile_status(object) {
            let info_log = gl.shader_info_log(object);
            let log = if info_log.is_empty() {
                error!("Shader Compile Error No Info");
                NO_DIAGNOSTICS.to_owned()
            } else {
                error!("Shader Compile Error:\n{}", info_log);
                info_log
            };
            gl.delete_shader(object);
            return Err(Error::ShaderCompileFailed { kind, log });
        }

        Ok(Shader { object, kind, destroyed: false })
    }

    #[inline]
    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    #[inline]
    pub fn object(&self) -> G::Shader {
        self.object
    }

    pub fn destroy(&mut self, gl: &G) {
        if self.destroyed {
            return;
        }
        gl.delete_shader(self.object);
        self.destroyed = true;
    }
}
