//! # NUI Panel Resource
//!
//! A minimal server-side resource: it greets on startup, optionally
//! registers one in-game command, and signals the invoking player's
//! client to open its NUI panel. Diagnostic output goes through the
//! conditional debug logger, gated by the `[debug]` configuration
//! section.
//!
//! The resource never touches the network itself; it consumes the
//! [`ServerContext`] and [`CommandRegistry`] seams provided by the host
//! runtime.

use async_trait::async_trait;
use debug_log::{log_values, ConfigHandle, DebugLogger, LogModule, LogSink};
use futures::FutureExt;
use resource_api::{
    current_timestamp, CommandError, CommandRegistry, CommandSource, Resource, ResourceError,
    ServerContext,
};
use std::sync::Arc;
use tracing::{info, warn};

pub mod config;
pub mod events;

pub use config::{ConfigError, ResourceConfig};
pub use events::{open_nui_event_name, OpenNuiEvent, OPEN_NUI_EVENT};

/// The NUI panel resource.
///
/// Constructed by the host's composition root from a validated
/// [`ResourceConfig`]. The debug logger is built once, on the first
/// lifecycle call, so its identity can be taken from the host-assigned
/// resource name; every later call reuses the same shared instance.
pub struct NuiPanelResource {
    config: ResourceConfig,
    debug_config: ConfigHandle,
    sink: Option<Arc<dyn LogSink>>,
    logger: Option<Arc<DebugLogger>>,
}

impl NuiPanelResource {
    /// Creates the resource with debug output routed to the standard streams.
    pub fn new(config: ResourceConfig) -> Self {
        let debug_config = ConfigHandle::new(config.debug.clone());
        Self {
            config,
            debug_config,
            sink: None,
            logger: None,
        }
    }

    /// Creates the resource with debug output routed to a custom sink.
    ///
    /// Used by embedding hosts and tests that assert on log destinations.
    pub fn with_sink(config: ResourceConfig, sink: Arc<dyn LogSink>) -> Self {
        let mut resource = Self::new(config);
        resource.sink = Some(sink);
        resource
    }

    /// Live handle to the debug logging configuration.
    ///
    /// The owner can update it at runtime; the logger picks the change up
    /// on its next call.
    pub fn debug_config(&self) -> &ConfigHandle {
        &self.debug_config
    }

    /// Returns the shared logger, building it exactly once.
    ///
    /// The resource identity is queried from the host context at
    /// construction time and cached for the logger's lifetime.
    fn logger(&mut self, context: &dyn ServerContext) -> Arc<DebugLogger> {
        if let Some(logger) = &self.logger {
            return logger.clone();
        }
        let logger = match &self.sink {
            Some(sink) => Arc::new(DebugLogger::new(
                context.resource_name(),
                self.debug_config.clone(),
                sink.clone(),
            )),
            None => Arc::new(DebugLogger::stdio(
                context.resource_name(),
                self.debug_config.clone(),
            )),
        };
        self.logger = Some(logger.clone());
        logger
    }
}

#[async_trait]
impl Resource for NuiPanelResource {
    fn name(&self) -> &str {
        "nui_panel"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn register_commands(
        &mut self,
        commands: Arc<CommandRegistry>,
        context: Arc<dyn ServerContext>,
    ) -> Result<(), ResourceError> {
        if !self.config.enable_nui_command {
            info!("NUI command disabled by configuration, nothing to register");
            return Ok(());
        }

        let logger = self.logger(context.as_ref());
        let command_name = self.config.nui_command_name.clone();
        let handler_context = context.clone();
        let handler_logger = logger.clone();

        commands
            .register(&command_name, move |source| {
                let context = handler_context.clone();
                let logger = handler_logger.clone();
                async move { open_nui(context, logger, source).await }.boxed()
            })
            .map_err(|e| ResourceError::InitializationFailed(e.to_string()))?;

        logger.debug(
            LogModule::Server,
            "Registered NUI command",
            &log_values![command_name],
        );
        Ok(())
    }

    async fn on_start(&mut self, context: Arc<dyn ServerContext>) -> Result<(), ResourceError> {
        let logger = self.logger(context.as_ref());
        info!(
            "👋 {} v{} started as '{}'",
            self.name(),
            self.version(),
            context.resource_name()
        );
        logger.info(
            LogModule::Server,
            "Resource started",
            &log_values![self.version()],
        );
        Ok(())
    }

    async fn on_stop(&mut self, context: Arc<dyn ServerContext>) -> Result<(), ResourceError> {
        let logger = self.logger(context.as_ref());
        logger.info(LogModule::Server, "Resource stopping", &[]);
        info!("👋 {} stopped", self.name());
        Ok(())
    }
}

/// Handles one invocation of the NUI command.
///
/// Console invocations have no client to open a panel for and are
/// silently ignored, matching the command's chat-box intent.
async fn open_nui(
    context: Arc<dyn ServerContext>,
    logger: Arc<DebugLogger>,
    source: CommandSource,
) -> Result<(), CommandError> {
    let player_id = match source.player_id() {
        Some(id) => id,
        None => {
            logger.debug(
                LogModule::Server,
                "NUI command invoked from console, ignoring",
                &[],
            );
            return Ok(());
        }
    };

    let event = OpenNuiEvent {
        resource: context.resource_name().to_string(),
        player_id,
        timestamp: current_timestamp(),
    };
    let payload =
        serde_json::to_vec(&event).map_err(|e| CommandError::HandlerFailed(e.to_string()))?;
    let event_name = open_nui_event_name(context.resource_name());

    context
        .emit_client(player_id, &event_name, &payload)
        .await
        .map_err(|e| {
            warn!("Failed to signal NUI open for {}: {}", player_id, e);
            CommandError::HandlerFailed(e.to_string())
        })?;

    logger.info(
        LogModule::Ui,
        "NUI open signal sent",
        &log_values![player_id.to_string()],
    );
    Ok(())
}
