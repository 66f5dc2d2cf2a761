//! Logging utilities.
//!
//! Centralizes logger initialization for binaries embedding the shading
//! crates. Library code only emits through the `log` facade; hosts that
//! already own a logger just skip [`init_logging`] and the drawing
//! diagnostics flow to whatever is installed.

mod init;

pub use init::{init_logging, LoggingConfig};
