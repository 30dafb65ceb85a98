//! Top-level command orchestration.
pub mod init;
