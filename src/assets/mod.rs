//! Local installation of the bridge's JavaScript runtimes
//!
//! Rendered output references two scripts: the d3 charting runtime and the
//! figbridge rendering runtime. Installing them next to the notebook lets
//! plots load with no web connection.
//!
//! Destination selection is a single capability check, not scattered
//! conditionals: an explicit location always wins, a detected notebook data
//! directory uses the host's `nbextensions/` layout, and otherwise the
//! current working directory serves the files directly.

mod copy;
mod host;
mod plain;

pub use host::{notebook_data_dir, HostManagedInstaller, JUPYTER_DATA_DIR_VAR};
pub use plain::PlainDirectoryInstaller;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FigbridgeError, FigbridgeResult};
use crate::urls;

/// Resolved source pair for one installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSources {
    /// Path of the d3 runtime to install.
    pub d3: PathBuf,
    /// Path of the figbridge rendering runtime to install.
    pub renderer: PathBuf,
}

impl AssetSources {
    /// Both sources, in install order.
    pub(crate) fn paths(&self) -> [&Path; 2] {
        [&self.d3, &self.renderer]
    }

    /// Validate that both source files exist.
    ///
    /// Runs before any copy so a bad path never leaves a partial install.
    fn validate(&self) -> FigbridgeResult<()> {
        for path in self.paths() {
            if !path.exists() {
                return Err(FigbridgeError::SourceMissing {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

/// Per-call overrides for [`install_local_js`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstallOptions {
    /// Destination directory. Default is the detected notebook data
    /// directory, falling back to the current working directory.
    pub location: Option<PathBuf>,
    /// Source of the d3 runtime; default from [`urls::d3_local`].
    pub d3_src: Option<PathBuf>,
    /// Source of the rendering runtime; default from
    /// [`urls::renderer_local`].
    pub renderer_src: Option<PathBuf>,
}

/// URLs under which the installed scripts are served, for embedding in
/// generated `<script src=...>` references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledScripts {
    /// URL of the installed d3 runtime.
    pub d3_url: String,
    /// URL of the installed figbridge rendering runtime.
    pub renderer_url: String,
}

/// Destination strategy for the two runtimes.
///
/// Implementations:
/// - [`HostManagedInstaller`] - notebook `nbextensions/` directory
/// - [`PlainDirectoryInstaller`] - any plain directory
pub trait AssetInstaller {
    /// URL prefix under which installed basenames are served.
    fn url_prefix(&self) -> &'static str;

    /// Place both sources at the destination.
    fn install(&self, sources: &AssetSources) -> FigbridgeResult<()>;
}

/// Install the d3 and figbridge runtimes for offline use.
///
/// Source paths default to the bundled locations in [`urls`]; both must
/// exist or the call fails before any copy. The destination is the explicit
/// `location` when given, else the notebook extension directory when one is
/// detected, else the current working directory.
///
/// Returns the URL pair to reference the installed scripts from generated
/// markup. A failure after the first asset copied leaves that copy in
/// place; the assets are idempotent static files, safe to leave.
pub fn install_local_js(options: InstallOptions) -> FigbridgeResult<InstalledScripts> {
    let sources = AssetSources {
        d3: match options.d3_src {
            Some(path) => path,
            None => urls::d3_local().ok_or_else(no_default_source)?,
        },
        renderer: match options.renderer_src {
            Some(path) => path,
            None => urls::renderer_local().ok_or_else(no_default_source)?,
        },
    };
    sources.validate()?;

    let installer: Box<dyn AssetInstaller> = match options.location {
        Some(location) => Box::new(PlainDirectoryInstaller::new(location)),
        None => match HostManagedInstaller::detect() {
            Some(host) => Box::new(host),
            None => Box::new(PlainDirectoryInstaller::new(std::env::current_dir()?)),
        },
    };

    installer.install(&sources)?;

    Ok(InstalledScripts {
        d3_url: serve_url(installer.url_prefix(), &sources.d3),
        renderer_url: serve_url(installer.url_prefix(), &sources.renderer),
    })
}

/// Basename of a source path, as it appears at the destination.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn serve_url(prefix: &str, src: &Path) -> String {
    format!("{}{}", prefix, basename(src))
}

fn no_default_source() -> FigbridgeError {
    FigbridgeError::BundledAssetsUnavailable {
        reason: format!(
            "platform data directory could not be determined; set {} or pass explicit sources",
            urls::FIGBRIDGE_JS_DIR_VAR
        ),
    }
}
