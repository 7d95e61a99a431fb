//! Configuration management module
//!
//! Provides:
//! - Configuration file loading from multiple locations
//! - YAML parsing and validation of the group/entry tree
//! - The starter-config writer behind `--init`
//!
//! The configuration is loaded once at startup and is read-only afterwards;
//! everything downstream (flattening, layout, selection) recomputes from the
//! same immutable [`ConfigTree`].

mod errors;
mod loader;
mod model;

pub use errors::ConfigError;
pub use loader::ConfigLoader;
pub use model::{ColumnMode, ConfigTree, Entry, Group, MountSpec, Settings};
pub use model::{DEFAULT_CHOICE_TIMEOUT_SECS, DEFAULT_GROUP_STEP, GROUP_PREFIX_LEN};
