//! Pure dependency pattern detection (no IO).
//!
//! Input: a manifest model constructed elsewhere.
//! Output: findings in detection order.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod rules;

mod engine;
pub mod checks;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::detect;
