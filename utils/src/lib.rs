//! Shared utilities for the custody wallet binaries.

pub mod logging;

pub use logging::{init_logging, LogFormat};
