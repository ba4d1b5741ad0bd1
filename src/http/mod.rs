//! HTTP server lifecycle.
//!
//! The server includes:
//! - Fatal bind errors (no retry)
//! - Startup announcement of the reachable URLs once the listener is up
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{run_server, start_server, ServerError};
