//! File-based structured logging.
//!
//! All `tracing` spans and events end up as plain text lines in a log file
//! next to the journal, since stdout is owned by the terminal UI.
//!
//! # Features
//!
//! - **File Output**: `<data dir>/jou/jou.log` unless `log_file` is configured
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in `config.toml`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
