// hexagon-activity/src/resources.rs
//
//! Access to the read-only asset bundle.

use crate::Error;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;

/// A read-only store of named blobs.
pub trait ResourceLoader {
    /// Appends the entire contents of the asset at `path` to `dest`.
    fn slurp(&self, dest: &mut Vec<u8>, path: &str) -> Result<(), Error>;
}

/// Serves assets from a directory on disk, laid out the same way as the packaged `assets/`
/// directory.
pub struct FilesystemResourceLoader {
    root: PathBuf,
}

impl FilesystemResourceLoader {
    #[inline]
    pub fn new<P>(root: P) -> FilesystemResourceLoader where P: Into<PathBuf> {
        FilesystemResourceLoader { root: root.into() }
    }
}

impl ResourceLoader for FilesystemResourceLoader {
    fn slurp(&self, dest: &mut Vec<u8>, path: &str) -> Result<(), Error> {
        let mut file = match File::open(self.root.join(path)) {
            Ok(file) => file,
            Err(ref err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::MissingAsset(path.to_owned()))
            }
            Err(_) => return Err(Error::AssetReadFailed(path.to_owned())),
        };
        file.read_to_end(dest).map_err(|_| Error::AssetReadFailed(path.to_owned()))?;
        Ok(())
    }
}
