//! Asset names and locations
//!
//! Single source of truth for the two JavaScript runtimes the bridge ships:
//! the d3 charting runtime and the figbridge rendering runtime. Callers that
//! embed network references use the CDN constants; the installer resolves
//! local defaults from the env override or the platform data directory.

use std::path::PathBuf;

/// Basename of the bundled d3 runtime.
pub const D3_FILENAME: &str = "d3.v5.min.js";

/// Basename of the bundled figbridge rendering runtime.
pub const RENDERER_FILENAME: &str = "figbridge.v0.9.min.js";

/// CDN location of the d3 runtime, for output that may load from network.
pub const D3_URL: &str = "https://d3js.org/d3.v5.min.js";

/// CDN location of the figbridge rendering runtime.
pub const RENDERER_URL: &str = "https://unpkg.com/figbridge@0.9/dist/figbridge.v0.9.min.js";

/// Environment variable overriding the bundled-asset directory.
///
/// Packagers point this wherever the runtimes actually landed; tests point
/// it at a tempdir.
pub const FIGBRIDGE_JS_DIR_VAR: &str = "FIGBRIDGE_JS_DIR";

/// Directory holding the bundled JavaScript runtimes.
///
/// `FIGBRIDGE_JS_DIR` wins when set; otherwise the platform data directory
/// is used, e.g. `~/.local/share/figbridge/js` on Linux.
///
/// Returns `None` only when neither the env var nor a platform data
/// directory can be resolved. Existence of the directory is not checked
/// here; the installer validates the resolved files.
pub fn js_dir() -> Option<PathBuf> {
    std::env::var(FIGBRIDGE_JS_DIR_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join("figbridge").join("js")))
}

/// Default local path of the d3 runtime.
pub fn d3_local() -> Option<PathBuf> {
    js_dir().map(|d| d.join(D3_FILENAME))
}

/// Default local path of the figbridge rendering runtime.
pub fn renderer_local() -> Option<PathBuf> {
    js_dir().map(|d| d.join(RENDERER_FILENAME))
}
