//! Client-bound event payloads.

use resource_api::PlayerId;
use serde::{Deserialize, Serialize};

/// Suffix of the client event instructing the UI panel to open.
///
/// The full event name is namespaced with the resource identity, see
/// [`open_nui_event_name`].
pub const OPEN_NUI_EVENT: &str = "openNui";

/// Returns the namespaced client event name for a resource instance.
pub fn open_nui_event_name(resource_name: &str) -> String {
    format!("{}:{}", resource_name, OPEN_NUI_EVENT)
}

/// Payload sent to a single client to open its NUI panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenNuiEvent {
    /// Identity of the resource instance that sent the signal
    pub resource: String,
    /// The player the panel should open for
    pub player_id: PlayerId,
    /// Unix timestamp of the invocation, in seconds
    pub timestamp: u64,
}
