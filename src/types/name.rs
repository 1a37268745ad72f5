/// Placeholder display name for entities whose geography cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Case-insensitive, whitespace-trimmed comparison of display names.
///
/// Every state-name comparison in the crate goes through here. County
/// records carry their owning state as a denormalized name string, so one
/// inconsistent comparison is enough to orphan a county.
pub fn name_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Normalized key form of a display name, for use in hash maps.
pub fn name_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
