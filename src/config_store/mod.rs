//! Persistent configuration store.
//!
//! Owns the in-memory [`Config`](crate::config::Config) together with the
//! key file document it was loaded from. Loading never fails; saving reports
//! failures both as a `Result` and through the store's
//! [`Notifier`](crate::notify::Notifier).

mod error;
mod persistence;
mod store;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use store::ConfigStore;
