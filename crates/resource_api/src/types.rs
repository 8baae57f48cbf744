//! # Core Type Definitions
//!
//! Fundamental types shared between the host runtime and resources.
//!
//! ## Key Types
//!
//! - [`PlayerId`] - Unique identifier for connected players
//! - [`CommandSource`] - The actor that invoked an in-game command
//!
//! ## Design Principles
//!
//! - **Type Safety**: Wrapper types prevent ID confusion across subsystems
//! - **Serialization**: All types support JSON serialization for network transmission

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player connected to the host runtime.
///
/// This is a wrapper around UUID that provides type safety and ensures
/// player IDs cannot be confused with other types of IDs in the system.
///
/// # Examples
///
/// ```rust
/// use resource_api::PlayerId;
///
/// // Create a new random player ID
/// let player_id = PlayerId::new();
///
/// // Convert to string for logging/display
/// println!("Player ID: {}", player_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a player ID from a string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice containing a valid UUID
    ///
    /// # Returns
    ///
    /// Returns `Ok(PlayerId)` if the string is a valid UUID, otherwise returns
    /// `Err(uuid::Error)` with details about the parsing failure.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The actor that invoked an in-game command.
///
/// Commands can arrive either from the server console or from a connected
/// player. Handlers that address a reply to the invoker must check for
/// [`CommandSource::Player`]; console invocations have no client to
/// respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSource {
    /// Invoked from the server console (no client attached).
    Console,
    /// Invoked by a connected player.
    Player(PlayerId),
}

impl CommandSource {
    /// Returns the invoking player's ID, or `None` for console invocations.
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            CommandSource::Console => None,
            CommandSource::Player(id) => Some(*id),
        }
    }
}

impl std::fmt::Display for CommandSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandSource::Console => write!(f, "console"),
            CommandSource::Player(id) => write!(f, "player {}", id),
        }
    }
}
