// hexagon-activity/build.rs
//
//! The `hexagon-activity` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        android: { target_os = "android" },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate EGL bindings. These are struct bindings loaded at runtime, so they are generated
    // for every target; the host uses them only for their types and constants.
    let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
