//! The conditional debug logger.

use crate::config::ConfigHandle;
use crate::level::{LogLevel, LogModule};
use crate::sink::{LogSink, LogStream, StdStreams};
use crate::value::LogValue;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

/// Conditional, category-gated, severity-thresholded logger.
///
/// The composition root constructs exactly one logger per resource and
/// shares it by `Arc`. The resource identity is captured once at
/// construction; the configuration is read through its [`ConfigHandle`]
/// on every call, so updates take effect on the next call without
/// rebuilding the logger.
///
/// A call is emitted if and only if the configuration is readable,
/// globally enabled, the call's category is enabled, and its severity is
/// at or above the configured minimum. Filtered calls produce no output
/// and no side effect. Logging never fails.
///
/// # Examples
///
/// ```rust
/// use debug_log::{ConfigHandle, DebugConfig, DebugLogger, LogModule, log_values};
/// use serde_json::json;
///
/// let config = ConfigHandle::new(DebugConfig::all_enabled());
/// let logger = DebugLogger::stdio("my_resource", config);
///
/// logger.info(LogModule::Server, "Resource started", &log_values!["v1.0.0"]);
/// logger.error(LogModule::Ui, "Panel failed", &log_values![json!({"code": 42})]);
/// ```
pub struct DebugLogger {
    resource_name: String,
    config: ConfigHandle,
    sink: Arc<dyn LogSink>,
}

impl DebugLogger {
    /// Creates a logger writing to the given sink.
    ///
    /// # Arguments
    ///
    /// * `resource_name` - Identity of the hosting resource instance,
    ///   included in every formatted line
    /// * `config` - Live configuration handle read on every call
    /// * `sink` - Destination for formatted lines
    pub fn new(
        resource_name: impl Into<String>,
        config: ConfigHandle,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            config,
            sink,
        }
    }

    /// Creates a logger writing to the process's standard streams.
    pub fn stdio(resource_name: impl Into<String>, config: ConfigHandle) -> Self {
        Self::new(resource_name, config, Arc::new(StdStreams))
    }

    /// The resource identity captured at construction.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// The configuration handle this logger reads.
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Decides whether a call at the given category and severity emits.
    ///
    /// An unreadable configuration suppresses output rather than failing.
    fn should_log(&self, module: LogModule, level: LogLevel) -> bool {
        let config = match self.config.snapshot() {
            Some(config) => config,
            None => return false,
        };
        if !config.enabled {
            return false;
        }
        if !config.modules.is_enabled(module) {
            return false;
        }
        level.rank() >= config.min_level.rank()
    }

    fn format_line(
        &self,
        module: LogModule,
        level: LogLevel,
        message: &str,
        extra_values: &[LogValue],
    ) -> String {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut line = format!(
            "[{}] [{}] [{}] [{}] {}",
            timestamp,
            self.resource_name,
            module.label(),
            level.label(),
            message
        );
        for value in extra_values {
            line.push(' ');
            line.push_str(&value.render());
        }
        line
    }

    /// Primary entry point: filter, format, and route one log call.
    ///
    /// Performs at most one synchronous write. Filtered calls return
    /// immediately with no side effect.
    pub fn log(
        &self,
        module: LogModule,
        level: LogLevel,
        message: &str,
        extra_values: &[LogValue],
    ) {
        if !self.should_log(module, level) {
            return;
        }

        let line = self.format_line(module, level, message, extra_values);
        let stream = match level {
            LogLevel::Error => LogStream::Error,
            LogLevel::Warn => LogStream::Warning,
            LogLevel::Debug | LogLevel::Info => LogStream::Standard,
        };
        self.sink.write_line(stream, &line);
    }

    /// Shorthand for [`DebugLogger::log`] at [`LogLevel::Debug`].
    pub fn debug(&self, module: LogModule, message: &str, extra_values: &[LogValue]) {
        self.log(module, LogLevel::Debug, message, extra_values);
    }

    /// Shorthand for [`DebugLogger::log`] at [`LogLevel::Info`].
    pub fn info(&self, module: LogModule, message: &str, extra_values: &[LogValue]) {
        self.log(module, LogLevel::Info, message, extra_values);
    }

    /// Shorthand for [`DebugLogger::log`] at [`LogLevel::Warn`].
    pub fn warn(&self, module: LogModule, message: &str, extra_values: &[LogValue]) {
        self.log(module, LogLevel::Warn, message, extra_values);
    }

    /// Shorthand for [`DebugLogger::log`] at [`LogLevel::Error`].
    pub fn error(&self, module: LogModule, message: &str, extra_values: &[LogValue]) {
        self.log(module, LogLevel::Error, message, extra_values);
    }
}
