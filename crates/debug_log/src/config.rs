//! Logger configuration and the live handle resources read it through.

use crate::level::{LogLevel, LogModule};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Per-category enable switches.
///
/// Every category defaults to enabled; the global [`DebugConfig::enabled`]
/// switch gates them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleToggles {
    /// Enable `client` category output
    pub client: bool,
    /// Enable `server` category output
    pub server: bool,
    /// Enable `ui` category output
    pub ui: bool,
}

impl Default for ModuleToggles {
    fn default() -> Self {
        Self {
            client: true,
            server: true,
            ui: true,
        }
    }
}

impl ModuleToggles {
    /// Returns whether the given category is enabled.
    pub fn is_enabled(&self, module: LogModule) -> bool {
        match module {
            LogModule::Client => self.client,
            LogModule::Server => self.server,
            LogModule::Ui => self.ui,
        }
    }
}

/// Configuration for the conditional debug logger.
///
/// Deserializes from the `[debug]` section of a resource configuration
/// file. The default is fully disabled, so an absent section means an
/// absent collaborator and output is suppressed rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Global kill switch for all debug output
    pub enabled: bool,
    /// Minimum severity that passes the filter
    pub min_level: LogLevel,
    /// Per-category switches
    pub modules: ModuleToggles,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_level: LogLevel::Info,
            modules: ModuleToggles::default(),
        }
    }
}

impl DebugConfig {
    /// A configuration with everything enabled at the lowest threshold.
    pub fn all_enabled() -> Self {
        Self {
            enabled: true,
            min_level: LogLevel::Debug,
            modules: ModuleToggles::default(),
        }
    }
}

/// Shared, live handle to a [`DebugConfig`].
///
/// The owner (typically the resource's configuration layer) constructs
/// the handle and may update it at any time; the logger reads it on every
/// call, so changes take effect on the next log call. Cloning the handle
/// shares the same underlying configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<DebugConfig>>,
}

impl ConfigHandle {
    /// Creates a handle owning the given configuration.
    pub fn new(config: DebugConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Creates a handle with the default (fully disabled) configuration.
    pub fn disabled() -> Self {
        Self::new(DebugConfig::default())
    }

    /// Returns a copy of the current configuration.
    ///
    /// Returns `None` if the underlying lock is poisoned; callers treat
    /// that the same as a disabled configuration.
    pub fn snapshot(&self) -> Option<DebugConfig> {
        self.inner.read().ok().map(|config| config.clone())
    }

    /// Applies a mutation to the current configuration.
    ///
    /// Silently does nothing if the underlying lock is poisoned.
    pub fn update(&self, apply: impl FnOnce(&mut DebugConfig)) {
        if let Ok(mut config) = self.inner.write() {
            apply(&mut config);
        }
    }

    /// Replaces the current configuration wholesale.
    pub fn replace(&self, config: DebugConfig) {
        self.update(|current| *current = config);
    }

    /// Returns whether two handles share the same underlying configuration.
    pub fn same_handle(&self, other: &ConfigHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
