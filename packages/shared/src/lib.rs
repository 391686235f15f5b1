//! Shared utilities for Repodex binaries.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
