//! Use case orchestration for deptherapy.
//!
//! This crate provides the application layer: it wires the loader, detector, cycle probe and
//! composer together. It is intentionally thin and delegates heavy lifting to those crates.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod error;
mod session;

pub use error::SessionError;
pub use session::{
    SessionInput, SessionOutput, build_probe, read_config_text, resolve_settings, run_session,
    session_exit_code,
};
