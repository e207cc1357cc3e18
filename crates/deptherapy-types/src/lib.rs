//! Stable types and codes shared across the deptherapy workspace.
//!
//! This crate is intentionally boring:
//! - finding categories and their stable codes
//! - the `Finding` value produced by the detector and the cycle probe

#![forbid(unsafe_code)]

pub mod finding;
pub mod ids;

pub use finding::{Category, Finding};
