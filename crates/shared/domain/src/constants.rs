//! Slice names and `OpenAPI` tags.

/// Slice names, also the prefix of their migration keys (`identity:0001`).
pub const IDENTITY_SLICE: &str = "identity";
pub const DONATIONS_SLICE: &str = "donations";

pub const SYSTEM_TAG: &str = "System";
pub const DONATIONS_TAG: &str = "Donations";
