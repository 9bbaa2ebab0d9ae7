//! Application initialization.
//!
//! The library itself is stateless; the only process-wide setup is the logger,
//! which the CLI installs once before dispatching a subcommand.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
