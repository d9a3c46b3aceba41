//! Shared utilities.

pub mod ansi;
