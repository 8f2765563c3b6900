//! Notebook-managed installation
//!
//! When the process runs next to a Jupyter-style notebook environment, the
//! runtimes belong in its `nbextensions/` directory and are served under
//! `/nbextensions/`. Detection is a single directory check; there is no
//! deeper integration with the host.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::copy::up_to_date;
use super::{basename, AssetInstaller, AssetSources};
use crate::error::FigbridgeResult;

/// Standard notebook override for the data directory.
///
/// Doubles as the test-isolation hook: tests point it at a tempdir.
pub const JUPYTER_DATA_DIR_VAR: &str = "JUPYTER_DATA_DIR";

/// Notebook data directory, if one can be resolved.
///
/// `JUPYTER_DATA_DIR` wins when set; otherwise `~/.jupyter` under the home
/// directory. Resolution does not check existence - the probe in
/// [`HostManagedInstaller::detect`] does.
pub fn notebook_data_dir() -> Option<PathBuf> {
    std::env::var(JUPYTER_DATA_DIR_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".jupyter")))
}

/// Installs into the notebook environment's extension directory.
#[derive(Debug, Clone)]
pub struct HostManagedInstaller {
    data_dir: PathBuf,
}

impl HostManagedInstaller {
    /// Install into `data_dir/nbextensions/`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Probe for a notebook environment.
    ///
    /// `None` means the caller degrades to plain-directory installation.
    pub fn detect() -> Option<Self> {
        notebook_data_dir().filter(|dir| dir.is_dir()).map(Self::new)
    }

    /// Extension directory the scripts land in.
    pub fn nbextensions_dir(&self) -> PathBuf {
        self.data_dir.join("nbextensions")
    }

    fn install_batch(&self, sources: &AssetSources) -> io::Result<()> {
        let dir = self.nbextensions_dir();
        fs::create_dir_all(&dir)?;
        for src in sources.paths() {
            let dest = dir.join(basename(src));
            if up_to_date(src, &dest) {
                log::debug!("{} is up to date, not copied", dest.display());
                continue;
            }
            fs::copy(src, &dest)?;
        }
        Ok(())
    }
}

impl AssetInstaller for HostManagedInstaller {
    fn url_prefix(&self) -> &'static str {
        "/nbextensions/"
    }

    fn install(&self, sources: &AssetSources) -> FigbridgeResult<()> {
        if let Err(err) = self.install_batch(sources) {
            // Stale read-only files from an earlier install; clear the
            // matching basenames and retry the whole batch once.
            log::debug!(
                "install into {} failed ({err}), deleting and retrying",
                self.nbextensions_dir().display()
            );
            let dir = self.nbextensions_dir();
            for src in sources.paths() {
                let dest = dir.join(basename(src));
                if dest.exists() {
                    fs::remove_file(&dest)?;
                }
            }
            self.install_batch(sources)?;
        }
        Ok(())
    }
}
