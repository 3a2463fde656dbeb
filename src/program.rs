// hexagon-activity/src/program.rs
//
//! Linking shader pairs into programs.

use crate::gles::Gles;
use crate::resources::ResourceLoader;
use crate::shader::{Shader, ShaderKind};
use crate::Error;

use std::thread;

const NO_DIAGNOSTICS: &str = "no diagnostic information available";

/// A linked program, together with the two shaders it was linked from.
///
/// Programs are never cached; every call to `from_assets()` compiles and links from scratch.
pub struct Program<G>
where
    G: Gles,
{
    pub(crate) object: G::Program,
    vertex_shader: Shader<G>,
    fragment_shader: Shader<G>,
    destroyed: bool,
}

impl<G> Drop for Program<G>
where
    G: Gles,
{
    fn drop(&mut self) {
        if !self.destroyed && !thread::panicking() {
            panic!("Programs must be destroyed explicitly with `destroy`!")
        }
    }
}

impl<G> Program<G>
where
    G: Gles,
{
    /// Loads, compiles and links the vertex and fragment shaders at the given asset paths.
    pub fn from_assets(gl: &G,
                       resource_loader: &dyn ResourceLoader,
                       vertex_path: &str,
                       fragment_path: &str)
                       -> Result<Program<G>, Error> {
        let mut vertex_shader = Shader::from_asset(gl, ShaderKind::Vertex, resource_loader,
                                                   vertex_path)?;
        let fragment_shader = match Shader::from_asset(gl,
                                                       ShaderKind::Fragment,
                                                       resource_loader,
                                                       fragment_path) {
            Ok(fragment_shader) => fragment_shader,
            Err(err) => {
                vertex_shader.destroy(gl);
                return Err(err);
            }
        };
        Program::new(gl, vertex_shader, fragment_shader)
    }

    /// Links the two shaders. The program takes ownership of them either way: on failure,
    /// everything is released before the error is returned.
    pub fn new(gl: &G, mut vertex_shader: Shader<G>, mut fragment_shader: Shader<G>)
               -> Result<Program<G>, Error> {
        debug_assert_eq!(vertex_shader.kind(), ShaderKind::Vertex);
        debug_assert_eq!(fragment_shader.kind(), ShaderKind::Fragment);

        let object = match gl.create_program() {
            Ok(object) => object,
            Err(err) => {
                vertex_shader.destroy(gl);
                fragment_shader.destroy(gl);
                return Err(err);
            }
        };
        gl.attach_shader(object, vertex_shader.object);
        gl.attach_shader(object, fragment_shader.object);
        gl.link_program(object);

        let mut program = Program { object, vertex_shader, fragment_shader, destroyed: false };
        if !gl.program_link_status(object) {
            let info_log = gl.program_info_log(object);
            let log = if info_log.is_empty() {
                error!("Program Link Error No Info");
                NO_DIAGNOSTICS.to_owned()
            } else {
                error!("Program Link Error:\n{}", info_log);
                info_log
            };
            program.destroy(gl);
            return Err(Error::ProgramLinkFailed(log));
        }

        Ok(program)
    }

    #[inline]
    pub fn object(&self) -> G::Program {
        self.object
    }

    /// Looks up the location of the named vertex attribute.
    pub fn attrib_location(&self, gl: &G, name: &str) -> Result<u32, Error> {
        gl.attrib_location(self.object, name)
          .ok_or_else(|| Error::AttributeNotFound(name.to_owned()))
    }

    /// Deletes the program and both of its shaders.
    pub fn destroy(&mut self, gl: &G) {
        if self.destroyed {
            return;
        }
        gl.detach_shader(self.object, self.vertex_shader.object);
        gl.detach_shader(self.object, self.fragment_shader.object);
        self.vertex_shader.destroy(gl);
        self.fragment_shader.destroy(gl);
        gl.delete_program(self.object);
        self.destroyed = true;
    }
}
