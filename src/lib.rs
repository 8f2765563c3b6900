//! Figbridge - runtime support for a figure-to-browser rendering bridge
//!
//! A figure rendered to the browser needs three small services from the host
//! plotting library: a DOM element id unique to each plot object, runtime
//! warnings when callers hit a renamed API, and a local copy of the d3 and
//! figbridge JavaScript runtimes so notebooks can load rendered output
//! without network access.
//!
//! The three concerns are independent; nothing here depends on anything else
//! in the crate beyond the shared error type.

pub mod assets;
pub mod deprecation;
pub mod error;
pub mod ident;
pub mod urls;

// Re-exports for convenience
pub use assets::{
    install_local_js, AssetInstaller, AssetSources, HostManagedInstaller, InstallOptions,
    InstalledScripts, PlainDirectoryInstaller,
};
pub use deprecation::{Deprecated, LogSink, WarningSink};
pub use error::{FigbridgeError, FigbridgeResult};
pub use ident::ElementId;
