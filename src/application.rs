// hexagon-activity/src/application.rs
//
//! The application state, and dispatch of lifecycle events onto it.

use crate::gles::Gles;
use crate::lifecycle::{AppState, LifecycleEvent};
use crate::platform::egl::context::Context;
use crate::platform::egl::device::Device;
use crate::platform::egl::functions::EglFunctions;
use crate::platform::egl::surface::{NativeWidget, Surface};
use crate::renderer::Renderer;
use crate::resources::ResourceLoader;
use crate::{AppConfig, Error};

use std::rc::Rc;

/// Builds the GL function table once a context is current, typically by resolving every entry
/// point through `eglGetProcAddress`.
pub type GlLoader<E, G> = Box<dyn Fn(&E) -> G>;

struct WindowTarget {
    _native_widget: Box<dyn NativeWidget>,
    context: Context,
    surface: Surface,
}

struct DisplayState<E>
where
    E: EglFunctions,
{
    device: Device<E>,
    window: Option<WindowTarget>,
}

/// Everything the activity owns: the display connection, the window's context and surface, the
/// GL function table and the renderer.
///
/// It is constructed by the entry point and lives on the main thread. The display is opened the
/// first time a window arrives and kept until `teardown()`, while the context and surface follow
/// the window.
pub struct ApplicationData<E, G>
where
    E: EglFunctions,
    G: Gles,
{
    config: AppConfig,
    egl: Rc<E>,
    gl_loader: GlLoader<E, G>,
    resource_loader: Box<dyn ResourceLoader>,
    display: Option<DisplayState<E>>,
    gl: Option<G>,
    renderer: Renderer<G>,
    state: AppState,
}

impl<E, G> Drop for ApplicationData<E, G>
where
    E: EglFunctions,
    G: Gles,
{
    fn drop(&mut self) {
        if self.state != AppState::Destroyed {
            if let Err(err) = self.teardown() {
                error!("failed to release graphics resources: {}", err);
            }
        }
    }
}

impl<E, G> ApplicationData<E, G>
where
    E: EglFunctions,
    G: Gles,
{
    pub fn new(egl: E,
               gl_loader: GlLoader<E, G>,
               resource_loader: Box<dyn ResourceLoader>,
               config: AppConfig)
               -> ApplicationData<E, G> {
        let renderer = Renderer::new(&config);
        ApplicationData {
            config,
            egl: Rc::new(egl),
            gl_loader,
            resource_loader,
            display: None,
            gl: None,
            renderer,
            state: AppState::Uninitialized,
        }
    }

    #[inline]
    pub fn state(&self) -> AppState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn device(&self) -> Option<&Device<E>> {
        self.display.as_ref().map(|display| &display.device)
    }

    #[inline]
    pub fn surface(&self) -> Option<&Surface> {
        self.window().map(|window| &window.surface)
    }

    #[inline]
    pub fn context(&self) -> Option<&Context> {
        self.window().map(|window| &window.context)
    }

    #[inline]
    pub fn gl(&self) -> Option<&G> {
        self.gl.as_ref()
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer<G> {
        &self.renderer
    }

    #[inline]
    pub fn has_window(&self) -> bool {
        self.window().is_some()
    }

    /// Reacts to one lifecycle event.
    ///
    /// Errors are returned after the state has been brought back to something consistent; the
    /// caller decides whether to keep going.
    pub fn handle_event(&mut self, event: LifecycleEvent) -> Result<(), Error> {
        if self.state == AppState::Destroyed {
            warn!("ignoring {:?}: the application has been destroyed", event);
            return Ok(());
        }

        debug!("{:?} in state {:?}", event, self.state);
        match event {
            LifecycleEvent::WindowAvailable(native_widget) => {
                // Any previous window is released first, so nothing is drawn until this succeeds.
                self.state = AppState::Uninitialized;
                self.init_surface(native_widget)?;
                self.render_frame()?;
                self.state = AppState::Rendered;
                Ok(())
            }
            LifecycleEvent::RedrawNeeded => {
                if self.has_window() {
                    self.render_frame()?;
                }
                Ok(())
            }
            LifecycleEvent::Pause => {
                if self.state == AppState::Rendered {
                    self.state = AppState::Paused;
                }
                Ok(())
            }
            LifecycleEvent::Resume => {
                if self.state == AppState::Paused {
                    if self.has_window() {
                        self.render_frame()?;
                        self.state = AppState::Rendered;
                    } else {
                        self.state = AppState::Uninitialized;
                    }
                }
                Ok(())
            }
            LifecycleEvent::WindowDestroyed => {
                let result = self.release_window();
                self.state = AppState::Uninitialized;
                result
            }
            LifecycleEvent::DestroyRequested => self.teardown(),
        }
    }

    /// Binds a window surface and OpenGL ES context for `native_widget` and makes them current.
    ///
    /// Any window already attached is released first. On success the viewport covers the whole
    /// surface.
    pub fn init_surface(&mut self, native_widget: Box<dyn NativeWidget>) -> Result<(), Error> {
        if self.has_window() {
            self.release_window()?;
        }

        let display = match self.display.take() {
            Some(display) => display,
            None => DisplayState { device: Device::new(Rc::clone(&self.egl))?, window: None },
        };
        let display = self.display.insert(display);
        let device = &display.device;

        let descriptor = device.create_context_descriptor(&self.config.context_attributes)?;
        let mut surface = device.create_window_surface(&descriptor, &*native_widget)?;
        let mut context = match device.create_context(&descriptor) {
            Ok(context) => context,
            Err(err) => {
                destroy_unbound(device, &mut surface, None);
                return Err(err);
            }
        };
        if let Err(err) = device.make_context_current(&context, &surface) {
            destroy_unbound(device, &mut surface, Some(&mut context));
            return Err(err);
        }

        let gl = match self.gl.take() {
            Some(gl) => gl,
            None => (self.gl_loader)(&*self.egl),
        };
        let gl = self.gl.insert(gl);

        let size = surface.size();
        gl.viewport(0, 0, size.width, size.height);
        info!("bound {}x{} window surface", size.width, size.height);

        display.window = Some(WindowTarget { _native_widget: native_widget, context, surface });
        Ok(())
    }

    /// Draws one frame into the attached window.
    pub fn render_frame(&mut self) -> Result<(), Error> {
        let display = self.display.as_ref().ok_or(Error::NoWidgetAttached)?;
        let window = display.window.as_ref().ok_or(Error::NoWidgetAttached)?;
        let gl = self.gl.as_ref().ok_or(Error::NoWidgetAttached)?;
        self.renderer.render(gl, &*self.resource_loader, &display.device, &window.surface)
    }

    /// Releases the renderer's GL objects, then the surface and context of the attached window.
    ///
    /// Every step is attempted even if an earlier one fails; the first error is returned.
    pub fn release_window(&mut self) -> Result<(), Error> {
        let display = match self.display.as_mut() {
            Some(display) => display,
            None => return Ok(()),
        };
        let mut window = match display.window.take() {
            Some(window) => window,
            None => return Ok(()),
        };

        if let Some(ref gl) = self.gl {
            self.renderer.destroy(gl);
        }

        let device = &display.device;
        let unbind_result = device.make_no_context_current();
        let surface_result = device.destroy_surface(&mut window.surface);
        let context_result = device.destroy_context(&mut window.context);
        info!("released window surface");
        unbind_result.and(surface_result).and(context_result)
    }

    /// Releases everything, including the display connection, and enters `Destroyed`.
    pub fn teardown(&mut self) -> Result<(), Error> {
        let window_result = self.release_window();
        let device_result = match self.display.take() {
            Some(mut display) => display.device.destroy(),
            None => Ok(()),
        };
        self.gl = None;
        self.state = AppState::Destroyed;
        window_result.and(device_result)
    }

    fn window(&self) -> Option<&WindowTarget> {
        self.display.as_ref().and_then(|display| display.window.as_ref())
    }
}

fn destroy_unbound<E>(device: &Device<E>, surface: &mut Surface, context: Option<&mut Context>)
where
    E: EglFunctions,
{
    if let Some(context) = context {
        if let Err(err) = device.destroy_context(context) {
            warn!("failed to destroy context: {}", err);
        }
    }
    if let Err(err) = device.destroy_surface(surface) {
        warn!("failed to destroy surface: {}", err);
    }
}
