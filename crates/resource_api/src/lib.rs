//! # Resource API
//!
//! Contracts between a game-server host runtime and the resources
//! (add-ons) it loads. A resource never talks to the network or the
//! console input directly; it consumes the seams defined here:
//!
//! - [`ServerContext`] - identity and client event emission, implemented
//!   by the host and handed to the resource during its lifecycle
//! - [`CommandRegistry`] - named in-game commands with async handlers
//! - [`Resource`] - the lifecycle trait a resource implements
//!
//! ## Lifecycle
//!
//! 1. **Creation**: the host constructs the resource
//! 2. **Command Registration**: [`Resource::register_commands`] is called
//!    with the registry and the server context
//! 3. **Start**: [`Resource::on_start`] is called once registration completes
//! 4. **Operation**: the host dispatches command invocations
//! 5. **Stop**: [`Resource::on_stop`] is called when the resource unloads

use async_trait::async_trait;
use std::sync::Arc;

pub mod commands;
pub mod types;
pub mod utils;

pub use commands::{CommandError, CommandHandler, CommandRegistry};
pub use types::{CommandSource, PlayerId};
pub use utils::current_timestamp;

/// Errors that can occur when a resource interacts with host services.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The addressed player is not connected
    #[error("Player {0} is not connected")]
    PlayerNotConnected(PlayerId),
    /// Event payload could not be delivered
    #[error("Event delivery failed: {0}")]
    DeliveryFailed(String),
    /// Internal host error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Errors that can occur during resource lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// Resource initialization failed during startup
    #[error("Resource initialization failed: {0}")]
    InitializationFailed(String),
    /// Error occurred while the resource was running
    #[error("Resource execution error: {0}")]
    ExecutionError(String),
    /// Runtime error such as a failed host call
    #[error("Resource runtime error: {0}")]
    Runtime(String),
}

/// Context provided by the host runtime to a running resource.
///
/// This is the resource's only view of the host: its own identity as the
/// host registered it, and a way to send a notification event to a
/// specific connected client. Production implementations live in the
/// host; tests substitute an in-memory recorder.
#[async_trait]
pub trait ServerContext: Send + Sync {
    /// Returns the identity of the hosting resource instance.
    ///
    /// This is the name the host registered the resource under and is
    /// stable for the lifetime of the process.
    fn resource_name(&self) -> &str;

    /// Sends a named event with a serialized payload to one client.
    ///
    /// The event is addressed to a single player; the client-side
    /// counterpart of the resource is expected to handle it.
    ///
    /// # Arguments
    ///
    /// * `player_id` - Target player identifier
    /// * `event` - Namespaced event name (e.g. `"my_resource:openNui"`)
    /// * `data` - Serialized payload bytes
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the event was queued for delivery, or
    /// `Err(ServerError)` if the send failed (e.g. player not connected).
    async fn emit_client(
        &self,
        player_id: PlayerId,
        event: &str,
        data: &[u8],
    ) -> Result<(), ServerError>;
}

/// Lifecycle trait implemented by a resource.
///
/// # Examples
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use resource_api::{CommandRegistry, Resource, ResourceError, ServerContext};
/// use std::sync::Arc;
///
/// struct HelloResource;
///
/// #[async_trait]
/// impl Resource for HelloResource {
///     fn name(&self) -> &str {
///         "hello"
///     }
///
///     fn version(&self) -> &str {
///         "1.0.0"
///     }
///
///     async fn register_commands(
///         &mut self,
///         _commands: Arc<CommandRegistry>,
///         _context: Arc<dyn ServerContext>,
///     ) -> Result<(), ResourceError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Returns the name of this resource.
    ///
    /// The name should be unique and stable across versions. It's used for
    /// command attribution and logging.
    fn name(&self) -> &str;

    /// Returns the version string of this resource.
    ///
    /// Should follow semantic versioning (e.g. "1.2.3").
    fn version(&self) -> &str;

    /// Registers in-game commands before the resource starts.
    ///
    /// This method is called before [`Resource::on_start`] and should set
    /// up every command the resource wants to expose. The context is
    /// available so handlers can capture it for event emission.
    async fn register_commands(
        &mut self,
        commands: Arc<CommandRegistry>,
        context: Arc<dyn ServerContext>,
    ) -> Result<(), ResourceError>;

    /// Called once the resource is fully registered and running.
    async fn on_start(&mut self, _context: Arc<dyn ServerContext>) -> Result<(), ResourceError> {
        Ok(()) // Default implementation does nothing
    }

    /// Called when the resource is being unloaded or the host shuts down.
    async fn on_stop(&mut self, _context: Arc<dyn ServerContext>) -> Result<(), ResourceError> {
        Ok(()) // Default implementation does nothing
    }
}
