// hexagon-activity/src/platform/android/assets.rs
//
//! The application's asset bundle.

use crate::resources::ResourceLoader;
use crate::Error;

use ndk::asset::AssetManager;
use std::ffi::CString;
use std::io::Read;

/// Reads assets packaged in the APK through `AAssetManager`.
pub struct AssetManagerResourceLoader {
    asset_manager: AssetManager,
}

impl AssetManagerResourceLoader {
    #[inline]
    pub fn new(asset_manager: AssetManager) -> AssetManagerResourceLoader {
        AssetManagerResourceLoader { asset_manager }
    }
}

impl ResourceLoader for AssetManagerResourceLoader {
    fn slurp(&self, dest: &mut Vec<u8>, path: &str) -> Result<(), Error> {
        let filename = CString::new(path).map_err(|_| Error::MissingAsset(path.to_owned()))?;
        // The asset is closed when it goes out of scope.
        let mut asset = match self.asset_manager.open(&filename) {
            Some(asset) => asset,
            None => return Err(Error::MissingAsset(path.to_owned())),
        };
        dest.reserve(asset.length());
        asset.read_to_end(dest).map_err(|_| Error::AssetReadFailed(path.to_owned()))?;
        Ok(())
    }
}
