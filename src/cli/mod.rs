//! CLI module: argument definitions and command handlers.

pub mod args;
pub mod chat;
pub mod input;
pub mod sections;
pub mod shell;
