// hexagon-activity/src/platform/android/activity.rs
//
//! The `android_main` entry point and the event pump.

use crate::egl::Egl;
use crate::platform::egl::functions::{self, EglFunctions};
use crate::{AppConfig, AppState, ApplicationData, GlLoader, LifecycleEvent};
use super::assets::AssetManagerResourceLoader;
use super::widget::AndroidWidget;

use android_activity::{AndroidApp, MainEvent, PollEvent};
use log::LevelFilter;

#[no_mangle]
fn android_main(app: AndroidApp) {
    let config = AppConfig::default();
    android_logger::init_once(android_logger::Config::default()
                                  .with_max_level(LevelFilter::Debug)
                                  .with_tag(config.log_tag.as_str()));

    let egl = match functions::load_egl_library() {
        Ok(egl) => egl,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    let gl_loader: GlLoader<Egl, glow::Context> = Box::new(|egl: &Egl| {
        unsafe { glow::Context::from_loader_function(|symbol| egl.get_proc_address(symbol)) }
    });
    let resource_loader = Box::new(AssetManagerResourceLoader::new(app.asset_manager()));
    let mut application = ApplicationData::new(egl, gl_loader, resource_loader, config);

    while application.state() != AppState::Destroyed {
        app.poll_events(None, |event| {
            let main_event = match event {
                PollEvent::Main(main_event) => main_event,
                _ => return,
            };
            let lifecycle_event = match main_event {
                MainEvent::InitWindow { .. } => match app.native_window() {
                    Some(native_window) => {
                        LifecycleEvent::WindowAvailable(Box::new(AndroidWidget::new(native_window)))
                    }
                    None => {
                        warn!("InitWindow without a native window");
                        return;
                    }
                },
                MainEvent::TerminateWindow { .. } => LifecycleEvent::WindowDestroyed,
                MainEvent::RedrawNeeded { .. } => LifecycleEvent::RedrawNeeded,
                MainEvent::Pause => LifecycleEvent::Pause,
                MainEvent::Resume { .. } => LifecycleEvent::Resume,
                MainEvent::Destroy => LifecycleEvent::DestroyRequested,
                _ => return,
            };

            if let Err(err) = application.handle_event(lifecycle_event) {
                error!("{}", err);
                if err.is_fatal() {
                    if let Err(err) = application.teardown() {
                        error!("{}", err);
                    }
                }
            }
        });
    }

    info!("main loop finished");
}
