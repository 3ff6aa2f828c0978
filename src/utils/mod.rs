//! Utility modules
//!
//! Shared error types and logging helpers used across the crate.

pub mod errors;
pub mod logging;

pub use errors::{LangswitchError, Result};
