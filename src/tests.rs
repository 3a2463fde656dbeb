// hexagon-activity/src/tests.rs
//
// Off-device tests, driving the application against recording EGL and GL drivers.

use crate::egl;
use crate::egl::types::EGLint;
use crate::platform::egl::error::ToWindowingApiError;
use crate::{AppConfig, AppState, ApplicationData, Device, Error, FilesystemResourceLoader};
use crate::{GlLoader, LifecycleEvent, NativeWidget, Program, ResourceLoader, Shader, ShaderKind};
use crate::{VERTEX_COUNT, VERTICES, WindowingApiError};

use log::{Level, LevelFilter, Log, Metadata, Record};
use serial_test::serial;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::process;
use std::rc::Rc;
use std::sync::{Mutex, Once};

use self::mock::{EglCall, EglState, GlCall, GlState, MemoryResourceLoader, MockConfig};
use self::mock::{MockWidget, RecordingEgl, RecordingGl, SYNTAX_ERROR_DIAGNOSTIC, WINDOW};


const VERTEX_SOURCE: &str = "attribute vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_SOURCE: &str = "precision mediump float;
void main() {
    gl_FragColor = vec4(0.0, 0.0, 1.0, 1.0);
}
";

// Missing the closing brace.
const BROKEN_FRAGMENT_SOURCE: &str = "precision mediump float;
void main() {
    gl_FragColor = vec4(0.0, 0.0, 1.0, 1.0);
";

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger { records: Mutex::new(Vec::new()) };
static INSTALL_LOGGER: Once = Once::new();

fn install_logger() {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER.records.lock().unwrap().clear();
}

fn logged_error(fragment: &str) -> bool {
    LOGGER.records
          .lock()
          .unwrap()
          .iter()
          .any(|(level, message)| *level == Level::Error && message.contains(fragment))
}

fn example_assets() -> MemoryResourceLoader {
    let config = AppConfig::default();
    MemoryResourceLoader::default().with(&config.vertex_shader_path, VERTEX_SOURCE)
                                   .with(&config.fragment_shader_path, FRAGMENT_SOURCE)
}

fn example_config() -> AppConfig {
    AppConfig { position_attribute: "position".to_owned(), ..AppConfig::default() }
}

struct Harness {
    application: ApplicationData<RecordingEgl, RecordingGl>,
    egl: Rc<RefCell<EglState>>,
    gl: Rc<RefCell<GlState>>,
}

impl Harness {
    fn widget(&self) -> Box<dyn NativeWidget> {
        Box::new(MockWidget { state: Rc::clone(&self.egl) })
    }

    fn window_available(&mut self) -> Result<(), Error> {
        let widget = self.widget();
        self.application.handle_event(LifecycleEvent::WindowAvailable(widget))
    }

    fn draw_count(&self) -> usize {
        self.gl.borrow().count(|call| matches!(call, GlCall::DrawArrays { .. }))
    }

    fn swap_count(&self) -> usize {
        self.egl.borrow().count(|call| matches!(call, EglCall::SwapBuffers(_)))
    }

    fn assert_no_live_objects(&self) {
        let egl = self.egl.borrow();
        assert!(egl.live_surfaces.is_empty(), "leaked surfaces: {:?}", egl.live_surfaces);
        assert!(egl.live_contexts.is_empty(), "leaked contexts: {:?}", egl.live_contexts);
        let gl = self.gl.borrow();
        assert!(gl.live_shaders.is_empty(), "leaked shaders: {:?}", gl.live_shaders);
        assert!(gl.live_programs.is_empty(), "leaked programs: {:?}", gl.live_programs);
        assert!(gl.live_buffers.is_empty(), "leaked buffers: {:?}", gl.live_buffers);
    }
}

fn harness() -> Harness {
    harness_with(EglState::default(), GlState::default(), example_assets())
}

fn harness_with(egl_state: EglState, gl_state: GlState, assets: MemoryResourceLoader)
                -> Harness {
    let (egl, egl_state) = RecordingEgl::new(egl_state);
    let gl_state = Rc::new(RefCell::new(gl_state));
    let loader_gl_state = Rc::clone(&gl_state);
    let gl_loader: GlLoader<RecordingEgl, RecordingGl> = Box::new(move |_: &RecordingEgl| {
        RecordingGl { state: Rc::clone(&loader_gl_state) }
    });
    let application = ApplicationData::new(egl, gl_loader, Box::new(assets), example_config());
    Harness { application, egl: egl_state, gl: gl_state }
}

#[test]
#[serial]
fn test_valid_shader_compiles() {
    let (gl, gl_state) = RecordingGl::new(GlState::default());
    let mut shader = Shader::new(&gl, ShaderKind::Vertex, VERTEX_SOURCE).unwrap();
    assert_eq!(shader.kind(), ShaderKind::Vertex);
    assert!(gl_state.borrow().live_shaders.contains(&shader.object()));
    assert_eq!(gl_state.borrow().count(|call| matches!(call, GlCall::CompileShader(_))), 1);

    shader.destroy(&gl);
    assert!(gl_state.borrow().live_shaders.is_empty());
}

#[test]
#[serial]
fn test_compile_failure_reports_driver_diagnostics() {
    install_logger();
    let (gl, gl_state) = RecordingGl::new(GlState {
        report_diagnostics: true,
        ..GlState::default()
    });

    match Shader::new(&gl, ShaderKind::Fragment, BROKEN_FRAGMENT_SOURCE) {
        Err(Error::ShaderCompileFailed { kind, log }) => {
            assert_eq!(kind, ShaderKind::Fragment);
            assert_eq!(log, SYNTAX_ERROR_DIAGNOSTIC);
        }
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("a shader with a syntax error compiled"),
    }
    assert!(logged_error(SYNTAX_ERROR_DIAGNOSTIC));
    assert!(gl_state.borrow().live_shaders.is_empty());
}

#[test]
#[serial]
fn test_compile_failure_without_diagnostics() {
    install_logger();
    let (gl, gl_state) = RecordingGl::new(GlState::default());

    match Shader::new(&gl, ShaderKind::Fragment, BROKEN_FRAGMENT_SOURCE) {
        Err(Error::ShaderCompileFailed { log, .. }) => assert!(!log.is_empty()),
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("a shader with a syntax error compiled"),
    }
    assert!(logged_error("Shader Compile Error No Info"));
    assert!(gl_state.borrow().live_shaders.is_empty());
}

#[test]
#[serial]
fn test_missing_asset_makes_no_gpu_calls() {
    install_logger();
    let (gl, gl_state) = RecordingGl::new(GlState::default());
    let assets = MemoryResourceLoader::default();

    match Shader::from_asset(&gl, ShaderKind::Vertex, &assets, "shader/vertex/missing.vert") {
        Err(err @ Error::MissingAsset(_)) => assert!(err.is_fatal()),
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("a shader was built from a missing asset"),
    }
    assert!(logged_error("Failed shader file: shader/vertex/missing.vert"));
    assert!(gl_state.borrow().calls.is_empty());
}

#[test]
#[serial]
fn test_non_utf8_shader_asset() {
    struct BinaryResourceLoader;
    impl ResourceLoader for BinaryResourceLoader {
        fn slurp(&self, dest: &mut Vec<u8>, _: &str) -> Result<(), Error> {
            dest.extend_from_slice(&[0xff, 0xfe, 0x00]);
            Ok(())
        }
    }

    let (gl, gl_state) = RecordingGl::new(GlState::default());
    match Shader::from_asset(&gl, ShaderKind::Vertex, &BinaryResourceLoader, "binary") {
        Err(Error::InvalidShaderSource(path)) => assert_eq!(path, "binary"),
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("a shader was built from binary data"),
    }
    assert!(gl_state.borrow().calls.is_empty());
}

#[test]
#[serial]
fn test_program_builds_are_independent() {
    let (gl, gl_state) = RecordingGl::new(GlState::default());
    let assets = example_assets();
    let config = AppConfig::default();

    let mut first = Program::from_assets(&gl,
                                         &assets,
                                         &config.vertex_shader_path,
                                         &config.fragment_shader_path).unwrap();
    let mut second = Program::from_assets(&gl,
                                          &assets,
                                          &config.vertex_shader_path,
                                          &config.fragment_shader_path).unwrap();
    assert_ne!(first.object(), second.object());
    {
        let state = gl_state.borrow();
        assert_eq!(state.count(|call| matches!(call, GlCall::CompileShader(_))), 4);
        assert_eq!(state.count(|call| matches!(call, GlCall::LinkProgram(_))), 2);
        assert_eq!(state.live_programs.len(), 2);
    }

    first.destroy(&gl);
    second.destroy(&gl);
    let state = gl_state.borrow();
    assert!(state.live_programs.is_empty());
    assert!(state.live_shaders.is_empty());
}

#[test]
#[serial]
fn test_link_failure_releases_everything() {
    install_logger();
    let (gl, gl_state) = RecordingGl::new(GlState {
        fail_link: true,
        link_diagnostics: "error: no main function in vertex shader".to_owned(),
        ..GlState::default()
    });
    let assets = example_assets();
    let config = AppConfig::default();

    match Program::from_assets(&gl, &assets, &config.vertex_shader_path,
                               &config.fragment_shader_path) {
        Err(Error::ProgramLinkFailed(log)) => assert!(log.contains("no main function")),
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("linking was supposed to fail"),
    }
    assert!(logged_error("Program Link Error"));
    let state = gl_state.borrow();
    assert!(state.live_programs.is_empty());
    assert!(state.live_shaders.is_empty());
}

#[test]
#[serial]
fn test_fragment_failure_releases_vertex_shader() {
    let (gl, gl_state) = RecordingGl::new(GlState::default());
    let assets = MemoryResourceLoader::default().with("a.vert", VERTEX_SOURCE)
                                                .with("b.frag", BROKEN_FRAGMENT_SOURCE);

    match Program::from_assets(&gl, &assets, "a.vert", "b.frag") {
        Err(Error::ShaderCompileFailed { kind: ShaderKind::Fragment, .. }) => {}
        Err(err) => panic!("unexpected error: {:?}", err),
        Ok(_) => panic!("a broken fragment shader was linked"),
    }
    let state = gl_state.borrow();
    assert!(state.live_shaders.is_empty());
    assert_eq!(state.count(|call| matches!(call, GlCall::CreateProgram(_))), 0);
}

#[test]
#[serial]
fn test_missing_attribute_is_reported() {
    let (gl, gl_state) = RecordingGl::new(GlState::default());
    let assets = example_assets();
    let config = AppConfig::default();

    let mut program = Program::from_assets(&gl,
                                           &assets,
                                           &config.vertex_shader_path,
                                           &config.fragment_shader_path).unwrap();
    assert_eq!(program.attrib_location(&gl, "position").unwrap(), 0);
    match program.attrib_location(&gl, "vNormal") {
        Err(Error::AttributeNotFound(name)) => assert_eq!(name, "vNormal"),
        other => panic!("unexpected result: {:?}", other),
    }
    program.destroy(&gl);
    assert!(gl_state.borrow().live_programs.is_empty());
}

#[test]
#[serial]
fn test_init_surface_binds_window() {
    let mut harness = harness_with(EglState {
        configs: vec![MockConfig::rgb888(4)],
        surface_size: (1080, 1920),
        ..EglState::default()
    }, GlState::default(), example_assets());
    let widget = harness.widget();
    harness.application.init_surface(widget).unwrap();

    assert!(harness.application.device().is_some());
    assert!(harness.application.context().is_some());
    let size = harness.application.surface().unwrap().size();
    assert_eq!((size.width, size.height), (1080, 1920));
    assert!(harness.gl.borrow().calls.contains(&GlCall::Viewport(0, 0, 1080, 1920)));

    {
        let egl = harness.egl.borrow();
        let geometry = egl.position(|call| *call == EglCall::SetBuffersGeometry(4)).unwrap();
        let surface = egl.position(|call| {
            *call == EglCall::CreateWindowSurface { window: WINDOW }
        }).unwrap();
        assert!(geometry < surface);
        assert!(egl.calls.contains(&EglCall::CreateContext { client_version: 2 }));
        assert_eq!(egl.count(|call| matches!(call, EglCall::MakeCurrent { .. })), 1);
    }

    harness.application.teardown().unwrap();
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_config_request_and_sanitization() {
    // The first match is a 5-6-5 config; only the second has exactly 8 bits per channel.
    let mut harness = harness_with(EglState {
        configs: vec![
            MockConfig { red: 5, green: 6, blue: 5, native_visual_id: 4 },
            MockConfig::rgb888(1),
        ],
        ..EglState::default()
    }, GlState::default(), example_assets());
    let widget = harness.widget();
    harness.application.init_surface(widget).unwrap();

    let egl = harness.egl.borrow();
    assert!(egl.calls.contains(&EglCall::SetBuffersGeometry(1)));
    let requested = match egl.calls.iter().find(|call| matches!(call, EglCall::ChooseConfig(_))) {
        Some(EglCall::ChooseConfig(attributes)) => attributes.clone(),
        _ => panic!("no config was chosen"),
    };
    for &(attribute, value) in &[
        (egl::BLUE_SIZE as EGLint, 8),
        (egl::GREEN_SIZE as EGLint, 8),
        (egl::RED_SIZE as EGLint, 8),
        (egl::RENDERABLE_TYPE as EGLint, egl::OPENGL_ES2_BIT as EGLint),
    ] {
        assert!(requested.chunks(2).any(|pair| pair == [attribute, value]),
                "attribute {:#x} was not requested as {}",
                attribute,
                value);
    }
    assert!(requested.ends_with(&[egl::NONE as EGLint, 0, 0, 0]));
}

#[test]
#[serial]
fn test_window_available_draws_once() {
    let mut harness = harness();
    harness.window_available().unwrap();

    assert_eq!(harness.application.state(), AppState::Rendered);
    assert_eq!(harness.draw_count(), 1);
    assert_eq!(harness.swap_count(), 1);
    let gl = harness.gl.borrow();
    assert!(gl.calls.contains(&GlCall::DrawArrays {
        mode: glow::TRIANGLES,
        first: 0,
        count: VERTEX_COUNT,
    }));
    assert!(gl.calls.contains(&GlCall::VertexAttribPointer { index: 0, components: 2 }));
    assert!(gl.calls.contains(&GlCall::ClearColor([0.0, 0.0, 1.0, 1.0])));
    assert_eq!(gl.buffer_data.len(), VERTICES.len() * 4);
    assert_eq!(VERTEX_COUNT as usize * 2, VERTICES.len());
}

#[test]
#[serial]
fn test_redraw_reuses_program() {
    let mut harness = harness();
    harness.window_available().unwrap();
    harness.application.handle_event(LifecycleEvent::RedrawNeeded).unwrap();

    assert_eq!(harness.draw_count(), 2);
    assert_eq!(harness.swap_count(), 2);
    assert_eq!(harness.gl.borrow().count(|call| matches!(call, GlCall::CreateProgram(_))), 1);
    assert!(harness.application.renderer().is_prepared());
}

#[test]
#[serial]
fn test_redraw_without_window_is_ignored() {
    let mut harness = harness();
    harness.application.handle_event(LifecycleEvent::RedrawNeeded).unwrap();
    assert_eq!(harness.draw_count(), 0);
    match harness.application.render_frame() {
        Err(Error::NoWidgetAttached) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
#[serial]
fn test_window_destroyed_releases_resources() {
    let mut harness = harness();
    harness.window_available().unwrap();
    harness.application.handle_event(LifecycleEvent::WindowDestroyed).unwrap();

    assert_eq!(harness.application.state(), AppState::Uninitialized);
    assert!(!harness.application.has_window());
    assert!(!harness.application.renderer().is_prepared());
    harness.assert_no_live_objects();
    {
        let egl = harness.egl.borrow();
        assert_eq!(egl.count(|call| matches!(call, EglCall::DestroySurface(_))), 1);
        assert_eq!(egl.count(|call| matches!(call, EglCall::DestroyContext(_))), 1);
        assert!(egl.initialized);
    }

    // A new window gets fresh objects.
    harness.window_available().unwrap();
    assert_eq!(harness.draw_count(), 2);
    assert_eq!(harness.gl.borrow().count(|call| matches!(call, GlCall::CreateProgram(_))), 2);
    assert_eq!(harness.egl.borrow().count(|call| *call == EglCall::Initialize), 1);
}

#[test]
#[serial]
fn test_destroy_requested_releases_everything() {
    let mut harness = harness();
    harness.window_available().unwrap();
    harness.application.handle_event(LifecycleEvent::DestroyRequested).unwrap();

    assert_eq!(harness.application.state(), AppState::Destroyed);
    assert!(harness.application.device().is_none());
    assert!(harness.application.gl().is_none());
    harness.assert_no_live_objects();
    assert!(!harness.egl.borrow().initialized);
    assert_eq!(harness.egl.borrow().count(|call| *call == EglCall::Terminate), 1);

    // Nothing reacts after destruction.
    harness.window_available().unwrap();
    harness.application.handle_event(LifecycleEvent::RedrawNeeded).unwrap();
    assert_eq!(harness.draw_count(), 1);
    assert_eq!(harness.application.state(), AppState::Destroyed);
}

#[test]
#[serial]
fn test_pause_and_resume() {
    let mut harness = harness();
    harness.application.handle_event(LifecycleEvent::Pause).unwrap();
    assert_eq!(harness.application.state(), AppState::Uninitialized);

    harness.window_available().unwrap();
    harness.application.handle_event(LifecycleEvent::Pause).unwrap();
    assert_eq!(harness.application.state(), AppState::Paused);
    assert!(harness.application.has_window());

    harness.application.handle_event(LifecycleEvent::Resume).unwrap();
    assert_eq!(harness.application.state(), AppState::Rendered);
    assert_eq!(harness.draw_count(), 2);

    harness.application.handle_event(LifecycleEvent::Pause).unwrap();
    harness.application.handle_event(LifecycleEvent::WindowDestroyed).unwrap();
    harness.application.handle_event(LifecycleEvent::Resume).unwrap();
    assert_eq!(harness.application.state(), AppState::Uninitialized);
    assert_eq!(harness.draw_count(), 2);
}

#[test]
#[serial]
fn test_missing_display() {
    let mut harness = harness_with(EglState { no_display: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::NoDisplay) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(harness.application.device().is_none());
    assert_eq!(harness.egl.borrow().count(|call| *call == EglCall::Initialize), 0);
}

#[test]
#[serial]
fn test_initialize_failure_is_typed() {
    let mut harness = harness_with(EglState { fail_initialize: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::DeviceOpenFailed(WindowingApiError::NotInitialized)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(harness.application.device().is_none());
    assert!(!harness.application.has_window());
    assert_eq!(harness.application.state(), AppState::Uninitialized);
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_choose_config_failure_is_typed() {
    let mut harness = harness_with(EglState { fail_choose_config: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::PixelFormatSelectionFailed(WindowingApiError::BadAttribute)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    harness.assert_no_live_objects();
    assert_eq!(harness.egl.borrow()
                      .count(|call| matches!(call, EglCall::CreateWindowSurface { .. })), 0);
}

#[test]
#[serial]
fn test_no_matching_config() {
    let mut harness = harness_with(EglState {
        configs: vec![MockConfig { red: 5, green: 6, blue: 5, native_visual_id: 4 }],
        ..EglState::default()
    }, GlState::default(), example_assets());
    match harness.window_available() {
        Err(Error::NoPixelFormatFound) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    let mut harness = harness_with(EglState { configs: vec![], ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::NoPixelFormatFound) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_buffers_geometry_failure_creates_no_surface() {
    let mut harness = harness_with(EglState {
        fail_buffers_geometry: true,
        ..EglState::default()
    }, GlState::default(), example_assets());
    match harness.window_available() {
        Err(Error::WindowGeometryFailed(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_make_current_failure_releases_surface_and_context() {
    let mut harness = harness_with(EglState { fail_make_current: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::MakeCurrentFailed(WindowingApiError::BadMatch)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!harness.application.has_window());
    assert!(harness.application.gl().is_none());
    harness.assert_no_live_objects();
    assert_eq!(harness.draw_count(), 0);
}

#[test]
#[serial]
fn test_missing_shader_asset_is_fatal() {
    let mut harness = harness_with(EglState::default(),
                                   GlState::default(),
                                   MemoryResourceLoader::default());
    match harness.window_available() {
        Err(err @ Error::MissingAsset(_)) => assert!(err.is_fatal()),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(harness.draw_count(), 0);
    assert_eq!(harness.gl.borrow().count(|call| matches!(call, GlCall::CreateShader(..))), 0);

    harness.application.teardown().unwrap();
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_drop_tears_down() {
    let harness = {
        let mut harness = harness();
        harness.window_available().unwrap();
        harness
    };
    let (egl, gl) = (Rc::clone(&harness.egl), Rc::clone(&harness.gl));
    drop(harness.application);

    assert_eq!(egl.borrow().count(|call| *call == EglCall::Terminate), 1);
    assert!(egl.borrow().live_surfaces.is_empty());
    assert!(egl.borrow().live_contexts.is_empty());
    assert!(gl.borrow().live_programs.is_empty());
}

#[test]
#[serial]
fn test_device_lifecycle() {
    let (egl, egl_state) = RecordingEgl::new(EglState::default());
    let mut device = Device::new(Rc::new(egl)).unwrap();
    assert!(!device.is_destroyed());
    assert!(egl_state.borrow().initialized);

    device.destroy().unwrap();
    assert!(device.is_destroyed());
    device.destroy().unwrap();
    assert_eq!(egl_state.borrow().count(|call| *call == EglCall::Terminate), 1);
}

#[test]
#[serial]
fn test_packaged_shaders_build() {
    let config = AppConfig::default();
    let assets = FilesystemResourceLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let (gl, _) = RecordingGl::new(GlState::default());

    let mut program = Program::from_assets(&gl,
                                           &assets,
                                           &config.vertex_shader_path,
                                           &config.fragment_shader_path).unwrap();
    assert!(program.attrib_location(&gl, &config.position_attribute).is_ok());
    program.destroy(&gl);
}

#[test]
#[serial]
fn test_filesystem_resource_loader() {
    let root = env::temp_dir().join(format!("hexagon-activity-assets-{}", process::id()));
    fs::create_dir_all(root.join("shader")).unwrap();
    fs::write(root.join("shader/test.vert"), VERTEX_SOURCE).unwrap();

    let loader = FilesystemResourceLoader::new(&root);
    let mut source = vec![];
    loader.slurp(&mut source, "shader/test.vert").unwrap();
    assert_eq!(source, VERTEX_SOURCE.as_bytes());

    match loader.slurp(&mut source, "shader/absent.vert") {
        Err(Error::MissingAsset(path)) => assert_eq!(path, "shader/absent.vert"),
        other => panic!("unexpected result: {:?}", other),
    }

    fs::remove_dir_all(&root).unwrap();
}

#[test]
#[serial]
fn test_egl_error_translation() {
    assert_eq!((egl::BAD_MATCH as EGLint).to_windowing_api_error(), WindowingApiError::BadMatch);
    assert_eq!((egl::BAD_NATIVE_WINDOW as EGLint).to_windowing_api_error(),
               WindowingApiError::BadNativeWindow);
    assert_eq!((egl::CONTEXT_LOST as EGLint).to_windowing_api_error(),
               WindowingApiError::ContextLost);
    assert_eq!((0x1234 as EGLint).to_windowing_api_error(), WindowingApiError::Failed);
}

#[test]
#[serial]
fn test_draw_error_is_reported() {
    let mut harness = harness();
    let widget = harness.widget();
    harness.application.init_surface(widget).unwrap();
    harness.gl.borrow_mut().error = glow::INVALID_OPERATION;

    match harness.application.render_frame() {
        Err(Error::DrawFailed(WindowingApiError::BadOperation)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(harness.swap_count(), 0);
}

#[test]
#[serial]
fn test_failed_replacement_window_leaves_nothing_rendered() {
    let mut harness = harness();
    harness.window_available().unwrap();
    assert_eq!(harness.application.state(), AppState::Rendered);

    harness.egl.borrow_mut().fail_make_current = true;
    match harness.window_available() {
        Err(Error::MakeCurrentFailed(WindowingApiError::BadMatch)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(harness.application.state(), AppState::Uninitialized);
    assert!(!harness.application.has_window());
    harness.assert_no_live_objects();

    // Without a window, pausing and resuming stays put.
    harness.application.handle_event(LifecycleEvent::Pause).unwrap();
    harness.application.handle_event(LifecycleEvent::Resume).unwrap();
    assert_eq!(harness.application.state(), AppState::Uninitialized);
    assert_eq!(harness.draw_count(), 1);
}

#[test]
#[serial]
fn test_surface_query_failure_destroys_surface() {
    let mut harness = harness_with(EglState { fail_query_surface: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::SurfaceQueryFailed(WindowingApiError::BadSurface)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!harness.application.has_window());
    assert_eq!(harness.egl.borrow().count(|call| matches!(call, EglCall::DestroySurface(_))), 1);
    assert_eq!(harness.egl.borrow()
                      .count(|call| matches!(call, EglCall::CreateContext { .. })), 0);
    harness.assert_no_live_objects();
}

#[test]
#[serial]
fn test_context_creation_failure_destroys_surface() {
    let mut harness = harness_with(EglState { fail_create_context: true, ..EglState::default() },
                                   GlState::default(),
                                   example_assets());
    match harness.window_available() {
        Err(Error::ContextCreationFailed(WindowingApiError::BadConfig)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!harness.application.has_window());
    assert!(harness.application.gl().is_none());
    assert_eq!(harness.egl.borrow().count(|call| matches!(call, EglCall::DestroySurface(_))), 1);
    assert_eq!(harness.egl.borrow().count(|call| matches!(call, EglCall::MakeCurrent { .. })), 0);
    harness.assert_no_live_objects();
}
