//! Report composition: turn findings into therapy session text.
//!
//! Randomness is always supplied by the caller so a fixed seed gives a fixed report.

#![forbid(unsafe_code)]

mod compose;
mod model;
pub mod templates;

pub use compose::{breakthrough_count, compose, fill};
pub use model::{Report, SessionInfo};
