//! Log severities and categories.
//!
//! Both sets are closed: severities form a total order used for filtering
//! and routing, categories partition log calls by subsystem so they can be
//! toggled independently.

use serde::{Deserialize, Serialize};

/// Severity of a log call.
///
/// Ordered `Debug < Info < Warn < Error`; a call passes the severity
/// filter when its level is at or above the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed information for debugging
    Debug,
    /// General informational messages
    Info,
    /// Warning conditions that should be investigated
    Warn,
    /// Errors that may affect resource behavior
    Error,
}

impl LogLevel {
    /// Numeric rank used for threshold comparisons.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Uppercase label as rendered in formatted output.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category tag partitioning log calls by subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogModule {
    /// Client-side behavior observed from the server
    Client,
    /// Server-side resource logic
    Server,
    /// UI panel interactions
    Ui,
}

impl LogModule {
    /// Lowercase name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogModule::Client => "client",
            LogModule::Server => "server",
            LogModule::Ui => "ui",
        }
    }

    /// Uppercase label as rendered in formatted output.
    pub fn label(&self) -> &'static str {
        match self {
            LogModule::Client => "CLIENT",
            LogModule::Server => "SERVER",
            LogModule::Ui => "UI",
        }
    }

    /// All categories, in declaration order.
    pub fn all() -> [LogModule; 3] {
        [LogModule::Client, LogModule::Server, LogModule::Ui]
    }
}

impl std::fmt::Display for LogModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
