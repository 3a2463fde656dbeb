// hexagon-activity/src/renderer.rs
//
//! Drawing the static figure.

use crate::gles::Gles;
use crate::platform::egl::device::Device;
use crate::platform::egl::functions::EglFunctions;
use crate::platform::egl::surface::Surface;
use crate::program::Program;
use crate::resources::ResourceLoader;
use crate::{AppConfig, Error, WindowingApiError};

/// The number of vertices drawn per frame: two triangles.
pub const VERTEX_COUNT: i32 = 6;

const POSITION_COMPONENTS: i32 = 2;

/// The figure, as a triangle list of 2D positions in normalized device coordinates.
pub static VERTICES: [f32; VERTEX_COUNT as usize * POSITION_COMPONENTS as usize] = [
    -0.5,  0.5,
     0.5,  0.5,
     0.5, -0.5,
     0.5, -0.5,
    -0.5, -0.5,
    -0.5,  0.5,
];

struct Resources<G>
where
    G: Gles,
{
    program: Program<G>,
    position_attribute: u32,
    vertex_buffer: G::Buffer,
}

/// Draws the figure into the current surface.
///
/// The program and vertex buffer are built on the first frame and reused until `destroy()` is
/// called, which must happen while the context they were created in is still current.
pub struct Renderer<G>
where
    G: Gles,
{
    vertex_shader_path: String,
    fragment_shader_path: String,
    position_attribute_name: String,
    clear_color: [f32; 4],
    resources: Option<Resources<G>>,
}

impl<G> Renderer<G>
where
    G: Gles,
{
    pub fn new(config: &AppConfig) -> Renderer<G> {
        Renderer {
            vertex_shader_path: config.vertex_shader_path.clone(),
            fragment_shader_path: config.fragment_shader_path.clone(),
            position_attribute_name: config.position_attribute.clone(),
            clear_color: config.clear_color,
            resources: None,
        }
    }

    /// Whether the program and vertex buffer currently exist.
    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.resources.is_some()
    }

    /// Clears, draws the figure once and presents `surface`.
    pub fn render<E>(&mut self,
                     gl: &G,
                     resource_loader: &dyn ResourceLoader,
                     device: &Device<E>,
                     surface: &Surface)
                     -> Result<(), Error>
    where
        E: EglFunctions,
    {
        let resources = match self.resources.take() {
            Some(resources) => resources,
            None => self.create_resources(gl, resource_loader)?,
        };
        let resources = self.resources.insert(resources);

        let [red, green, blue, alpha] = self.clear_color;
        gl.clear_color(red, green, blue, alpha);
        gl.clear(glow::COLOR_BUFFER_BIT);
        gl.use_program(Some(resources.program.object()));
        gl.bind_array_buffer(Some(resources.vertex_buffer));
        gl.vertex_attrib_pointer_f32(resources.position_attribute, POSITION_COMPONENTS);
        gl.enable_vertex_attrib_array(resources.position_attribute);
        gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT);

        let gl_error = gl.get_error();
        if gl_error != glow::NO_ERROR {
            return Err(Error::DrawFailed(WindowingApiError::from_gl_error(gl_error)));
        }

        device.present_surface(surface)
    }

    /// Releases the program, its shaders and the vertex buffer.
    pub fn destroy(&mut self, gl: &G) {
        if let Some(mut resources) = self.resources.take() {
            gl.use_program(None);
            gl.bind_array_buffer(None);
            gl.delete_buffer(resources.vertex_buffer);
            resources.program.destroy(gl);
        }
    }

    fn create_resources(&self, gl: &G, resource_loader: &dyn ResourceLoader)
                        -> Result<Resources<G>, Error> {
        let mut program = Program::from_assets(gl,
                                               resource_loader,
                                               &self.vertex_shader_path,
                                               &self.fragment_shader_path)?;

        let position_attribute = match program.attrib_location(gl, &self.position_attribute_name) {
            Ok(position_attribute) => position_attribute,
            Err(err) => {
                program.destroy(gl);
                return Err(err);
            }
        };

        let vertex_buffer = match gl.create_buffer() {
            Ok(vertex_buffer) => vertex_buffer,
            Err(err) => {
                program.destroy(gl);
                return Err(err);
            }
        };
        let vertex_data: Vec<u8> = VERTICES.iter().flat_map(|value| value.to_ne_bytes()).collect();
        gl.bind_array_buffer(Some(vertex_buffer));
        gl.array_buffer_data(&vertex_data);

        debug!("built program {:?} with `{}` at {}",
               program.object(),
               self.position_attribute_name,
               position_attribute);
        Ok(Resources { program, position_attribute, vertex_buffer })
    }
}
