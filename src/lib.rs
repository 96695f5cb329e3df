//! MTscan configuration store.
//!
//! MTscan is a wireless scanner for MikroTik RouterOS devices. This crate
//! holds its persistent configuration: window geometry, toolbar toggles,
//! connection profiles, file dialog paths, preferences, and the address
//! blacklist and highlightlist. Settings live in an INI-style key file and
//! always load, falling back to defaults for anything missing or malformed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mtscan::{config_store::ConfigStore, notify::LogNotifier};
//!
//! let mut store = ConfigStore::init(None, LogNotifier);
//!
//! store.set_window_size(1280, 720);
//! store.save().ok();
//! ```

/// Hardware address codec used by the address lists.
pub mod address;

/// Configuration schema, defaults, and file locations.
pub mod config;

/// Persistent configuration store.
pub mod config_store;

/// Core error types and result aliases.
pub mod core;

/// INI-style key file document.
pub mod keyfile;

/// User-facing notifications.
pub mod notify;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{MtscanError, Result};
