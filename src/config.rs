// hexagon-activity/src/config.rs
//
//! Application configuration.

use crate::context::ContextAttributes;

/// Everything the application needs to know up front.
///
/// There is no configuration file; the defaults describe the packaged assets.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Asset path of the vertex shader source.
    pub vertex_shader_path: String,
    /// Asset path of the fragment shader source.
    pub fragment_shader_path: String,
    /// Name of the vertex attribute that receives the 2D positions.
    pub position_attribute: String,
    /// RGBA color the color buffer is cleared to before drawing.
    pub clear_color: [f32; 4],
    /// The requested pixel format and API version.
    pub context_attributes: ContextAttributes,
    /// The tag log lines are written under.
    pub log_tag: String,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            vertex_shader_path: "shader/vertex/basic.vert".to_owned(),
            fragment_shader_path: "shader/fragment/basic.frag".to_owned(),
            position_attribute: "vPosition".to_owned(),
            clear_color: [0.0, 0.0, 1.0, 1.0],
            context_attributes: ContextAttributes::default(),
            log_tag: "hexagon-activity".to_owned(),
        }
    }
}
