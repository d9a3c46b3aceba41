//! # folio-core - Runtime for the folio portfolio terminal
//!
//! `folio-core` powers the `folio` binary. It provides the building blocks
//! for an interactive portfolio shell and its AI assistant:
//!
//! - **Profile Data**: the immutable record of biographical and professional
//!   facts every handler renders, with a built-in default and TOML override.
//! - **Command Interpreter**: tokenizer, fixed dispatch table, and section
//!   formatters, plus per-session scrollback, command history with recall
//!   navigation, and tab completion.
//! - **Chat Session Control**: a quota-limited conversation with a remote
//!   completion relay that degrades to a deterministic keyword-matched
//!   knowledge base when the quota is exhausted or the backend is down.
//! - **Contact Relay**: validated form submission through a form-relay
//!   service.
//! - **Configuration**: `folio.toml` plus environment overrides, with fixed
//!   strings and limits centralized in [`config::constants`].
//!
//! ## Quickstart
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_core::profile::Profile;
//! use folio_core::terminal::TerminalSession;
//!
//! let mut session = TerminalSession::new(Arc::new(Profile::builtin()));
//! session.submit("skills --list");
//! assert!(session.lines().len() > 1);
//! ```

pub mod chat;
pub mod config;
pub mod contact;
pub mod profile;
pub mod terminal;
pub mod utils;

pub use chat::{ChatMessage, ChatMode, ChatRole, ChatSession};
pub use config::FolioConfig;
pub use profile::Profile;
pub use terminal::{TerminalEvent, TerminalSession};
