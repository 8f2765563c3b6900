//! Plain-directory installation
//!
//! Fallback when no notebook environment is detected, and the strategy for
//! explicit locations. Files land directly in the given directory and are
//! served by the host under `/files/`.

use std::path::{Path, PathBuf};

use super::copy::copy_with_retry;
use super::{basename, AssetInstaller, AssetSources};
use crate::error::FigbridgeResult;

/// Installs into an existing plain directory.
///
/// The directory is not created; a missing or unwritable location surfaces
/// as the propagated copy failure.
#[derive(Debug, Clone)]
pub struct PlainDirectoryInstaller {
    location: PathBuf,
}

impl PlainDirectoryInstaller {
    /// Install into `location`.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Destination directory.
    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl AssetInstaller for PlainDirectoryInstaller {
    fn url_prefix(&self) -> &'static str {
        "/files/"
    }

    fn install(&self, sources: &AssetSources) -> FigbridgeResult<()> {
        for src in sources.paths() {
            let dest = self.location.join(basename(src));
            copy_with_retry(src, &dest)?;
        }
        Ok(())
    }
}
