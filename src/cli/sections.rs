//! Non-interactive section commands (`folio skills --list`, ...).
//!
//! These run the same dispatch path as the interactive shell, so output and
//! error behavior stay identical.

use anyhow::Result;
use tracing::info;

use folio_core::profile::Profile;
use folio_core::terminal::{commands, parser, OutputKind, TerminalEvent};
use folio_core::utils::ansi::{AnsiRenderer, MessageStyle};

/// Dispatch one synthesized command line and render its output. Returns the
/// output kind so the caller can derive the process exit status; scripts
/// rely on a non-zero exit for error output.
pub fn run(
    profile: &Profile,
    renderer: &mut AnsiRenderer,
    command_line: &str,
) -> Result<OutputKind> {
    let Some(parsed) = parser::parse(command_line) else {
        anyhow::bail!("empty command");
    };
    let execution = commands::execute(profile, &parsed);
    let style = match execution.output.kind {
        OutputKind::Error => MessageStyle::Error,
        OutputKind::Info => MessageStyle::Info,
        OutputKind::Success => MessageStyle::Output,
    };
    renderer.line(style, &execution.output.content)?;

    for event in &execution.events {
        if let TerminalEvent::OpenUrl(url) = event {
            info!(url = %url, "open-url event");
        }
    }

    Ok(execution.output.kind)
}
