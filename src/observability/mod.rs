//! Logging setup built on `tracing` and `tracing-subscriber`.
//!
//! The library itself only emits `tracing` spans and events; installing a
//! subscriber is left to the host. The CLI calls [`init_tracing`] at
//! startup.
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Setting `log_file` redirects output to a size-rotated file.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - [`file_writer`]: rotating file writer usable as a `MakeWriter`

pub mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::init_tracing;
