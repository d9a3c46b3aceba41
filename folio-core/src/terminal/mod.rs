//! The portfolio terminal: input parsing, command dispatch, and session
//! state.

pub mod commands;
pub mod parser;
pub mod session;

pub use commands::{
    CommandInfo, CommandOutput, Execution, OutputKind, Section, SectionItem, TerminalEvent,
    COMMANDS,
};
pub use parser::{parse, FlagValue, ParsedCommand};
pub use session::{LineKind, TerminalLine, TerminalSession};
