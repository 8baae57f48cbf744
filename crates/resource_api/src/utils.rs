//! Utility functions shared by the host runtime and resources.

/// Returns the current Unix timestamp in seconds.
///
/// All event payloads should use this function for timestamp generation
/// to ensure consistency across resources.
///
/// # Returns
///
/// Current time as seconds since Unix epoch (1970-01-01 00:00:00 UTC),
/// or 0 if the system clock is set before the epoch.
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
