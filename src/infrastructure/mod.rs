//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{config_dir, data_dir, default_log_path, default_store_path, expand_tilde};
