//! Command registration and dispatch.
//!
//! The host runtime owns a [`CommandRegistry`] and forwards chat-box and
//! console commands into it. Resources register named handlers during
//! [`Resource::register_commands`](crate::Resource::register_commands);
//! each handler receives the invoking [`CommandSource`] and runs to
//! completion before dispatch returns.

use crate::types::CommandSource;
use dashmap::DashMap;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::debug;

/// Errors that can occur during command registration and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A handler is already registered under this name
    #[error("Command already registered: {0}")]
    AlreadyRegistered(String),
    /// No handler is registered under this name
    #[error("Command not found: {0}")]
    NotFound(String),
    /// The handler itself failed while processing the invocation
    #[error("Command handler failed: {0}")]
    HandlerFailed(String),
}

/// Boxed asynchronous command handler stored by the registry.
pub type CommandHandler =
    Arc<dyn Fn(CommandSource) -> BoxFuture<'static, Result<(), CommandError>> + Send + Sync>;

/// Registry of named in-game commands.
///
/// Command names are matched exactly; registering the same name twice is
/// an error so that resources cannot silently shadow each other.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: DashMap<String, CommandHandler>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Registers a handler under `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - Command name as typed by the invoker
    /// * `handler` - Handler invoked with the command's [`CommandSource`]
    ///
    /// # Returns
    ///
    /// Returns `Err(CommandError::AlreadyRegistered)` if a handler with the
    /// same name exists.
    pub fn register<F>(&self, name: &str, handler: F) -> Result<(), CommandError>
    where
        F: Fn(CommandSource) -> BoxFuture<'static, Result<(), CommandError>>
            + Send
            + Sync
            + 'static,
    {
        if self.handlers.contains_key(name) {
            return Err(CommandError::AlreadyRegistered(name.to_string()));
        }
        self.handlers.insert(name.to_string(), Arc::new(handler));
        debug!("Registered command '{}'", name);
        Ok(())
    }

    /// Dispatches a command invocation to its registered handler.
    ///
    /// # Arguments
    ///
    /// * `name` - Command name as typed by the invoker
    /// * `source` - The actor that invoked the command
    ///
    /// # Returns
    ///
    /// Returns `Err(CommandError::NotFound)` if no handler is registered,
    /// otherwise whatever the handler returns.
    pub async fn dispatch(&self, name: &str, source: CommandSource) -> Result<(), CommandError> {
        let handler = self
            .handlers
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        handler(source).await
    }

    /// Returns whether a handler is registered under `name`.
    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether the registry has no commands.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
