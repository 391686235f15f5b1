//! HTTP server implementation.

pub mod error;
pub mod handler;
pub mod middleware;
pub mod router;
mod runner;
mod signal;
pub mod state;
pub mod validator;

pub use router::create_router;
pub use runner::{ServerConfig, ServerError, run, serve};
