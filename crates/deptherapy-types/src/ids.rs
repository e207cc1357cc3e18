//! Stable category codes.
//!
//! Codes are snake_case. They key `[checks.<code>]` tables in `deptherapy.toml` and are
//! shown next to treatment advice.

pub const CODE_IDENTITY_CRISIS: &str = "identity_crisis";
pub const CODE_CODEPENDENT: &str = "codependent";
pub const CODE_ABANDONMENT: &str = "abandonment";
pub const CODE_TOXIC_CYCLE: &str = "toxic_cycle";
pub const CODE_PEER_PRESSURE: &str = "peer_pressure";
