//! User-facing notifications.
//!
//! The configuration store never fails loudly. Conditions the user should
//! know about (falling back to defaults, a failed save) are handed to a
//! [`Notifier`], which the UI layer implements as a message dialog.

use std::fmt;

use tracing::{error, info};

/// How serious a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, the operation continued normally
    Info,
    /// Something failed but the process keeps running
    Error,
}

/// A message intended for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How serious the notice is
    pub severity: Severity,
    /// Short title, e.g. the dialog caption
    pub title: String,
    /// Message body
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Receives notices from the configuration store.
pub trait Notifier {
    /// Shows a notice to the user. Must not block on user interaction.
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice),
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Notifier that routes notices into the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => info!(title = %notice.title, "{}", notice.message),
            Severity::Error => error!(title = %notice.title, "{}", notice.message),
        }
    }
}
