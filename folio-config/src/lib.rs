//! Configuration for the folio portfolio.
//!
//! A [`FolioConfig`] says where the site content lives and which element ids
//! the components attach to. [`ConfigLoader`] resolves it from an explicit
//! file, `$FOLIO_CONFIG_PATH`, or built-in defaults, then applies environment
//! overrides and runs the guard rails in [`validation`].

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::FolioConfig;
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
