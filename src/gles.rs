// hexagon-activity/src/gles.rs
//
//! The subset of OpenGL ES 2 the renderer drives.

use crate::shader::ShaderKind;
use crate::Error;

use glow::HasContext;
use std::fmt::Debug;

/// The OpenGL ES 2 entry points used by the shader loader, program builder and renderer.
///
/// Every call is synchronous and targets whatever context is current on the calling thread.
/// The real implementation is `glow::Context`, loaded through `eglGetProcAddress` once a
/// context has been made current.
pub trait Gles {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, Error>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Returns the info log, or an empty string if the driver has nothing to say.
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, Error>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// Returns the info log, or an empty string if the driver has nothing to say.
    fn program_info_log(&self, program: Self::Program) -> String;
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_buffer(&self) -> Result<Self::Buffer, Error>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the bound array buffer as static draw data.
    fn array_buffer_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Points `index` at tightly packed float vectors of `components` at the start of the bound
    /// array buffer.
    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn get_error(&self) -> u32;
}

impl Gles for glow::Context {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type Buffer = glow::NativeBuffer;

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, Error> {
        unsafe { HasContext::create_shader(self, kind.to_gl()).map_err(Error::GLObjectCreationFailed) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, Error> {
        unsafe { HasContext::create_program(self).map_err(Error::GLObjectCreationFailed) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, Error> {
        unsafe { HasContext::create_buffer(self).map_err(Error::GLObjectCreationFailed) }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data(&self, data: &[u8]) {
        unsafe { self.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, components, glow::FLOAT, false, 0, 0)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { HasContext::clear_color(self, red, green, blue, alpha) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn get_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }
}
