//! Interactive portfolio shell.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use tracing::info;

use folio_core::config::constants::terminal;
use folio_core::profile::Profile;
use folio_core::terminal::{TerminalEvent, TerminalSession};
use folio_core::utils::ansi::{AnsiRenderer, MessageStyle};

use crate::cli::input::{EditAssist, InputOutcome, ShellInput};

/// Run the shell REPL until EOF or an exit command. On a real terminal the
/// prompt is a raw-mode line editor with history recall and completion;
/// piped input falls back to plain buffered reads.
pub fn run(profile: Arc<Profile>, renderer: &mut AnsiRenderer) -> Result<()> {
    let mut session = TerminalSession::new(profile);
    let mut rendered = 0;
    rendered += render_new_lines(&session, rendered, renderer)?;
    renderer.line(MessageStyle::System, "Type 'exit' to quit\n")?;

    if io::stdin().is_terminal() {
        run_interactive(&mut session, rendered, renderer)
    } else {
        run_piped(&mut session, rendered, renderer)
    }
}

fn run_interactive(
    session: &mut TerminalSession,
    mut rendered: usize,
    renderer: &mut AnsiRenderer,
) -> Result<()> {
    let mut input = ShellInput::default();
    loop {
        renderer.inline(MessageStyle::Prompt, terminal::PROMPT)?;
        renderer.inline(MessageStyle::Output, " ")?;
        io::stdout().flush().ok();

        let outcome = input.read_line(|assist, current| match assist {
            EditAssist::HistoryPrevious => session.recall_previous(),
            EditAssist::HistoryNext => session.recall_next(),
            EditAssist::Complete => session.complete(current).map(str::to_string),
        })?;
        let submitted = match outcome {
            InputOutcome::Submitted(text) => text,
            InputOutcome::ExitSession => break,
        };

        if !step(session, &mut rendered, renderer, &submitted)? {
            break;
        }
    }

    Ok(())
}

fn run_piped(
    session: &mut TerminalSession,
    mut rendered: usize,
    renderer: &mut AnsiRenderer,
) -> Result<()> {
    let stdin = io::stdin();
    loop {
        renderer.inline(MessageStyle::Prompt, terminal::PROMPT)?;
        renderer.inline(MessageStyle::Output, " ")?;
        io::stdout().flush().ok();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        if !step(session, &mut rendered, renderer, &input)? {
            break;
        }
    }

    Ok(())
}

/// Submit one line and render whatever the session appended. Returns `false`
/// on an exit command.
fn step(
    session: &mut TerminalSession,
    rendered: &mut usize,
    renderer: &mut AnsiRenderer,
    input: &str,
) -> Result<bool> {
    let line = input.trim();
    if line.is_empty() {
        return Ok(true);
    }
    if matches!(line, "exit" | "quit") {
        return Ok(false);
    }

    let events = session.submit(line);
    // The session echoed the input; skip re-rendering it.
    *rendered += 1;
    if session.lines().len() < *rendered {
        // `clear` replaced the scrollback with the seed.
        *rendered = 0;
    }
    *rendered += render_new_lines(session, *rendered, renderer)?;

    for event in events {
        handle_event(&event, renderer)?;
    }
    Ok(true)
}

fn render_new_lines(
    session: &TerminalSession,
    rendered: usize,
    renderer: &mut AnsiRenderer,
) -> Result<usize> {
    let new_lines = &session.lines()[rendered..];
    for line in new_lines {
        renderer.line(line.kind.into(), &line.content)?;
    }
    Ok(new_lines.len())
}

fn handle_event(event: &TerminalEvent, renderer: &mut AnsiRenderer) -> Result<()> {
    match event {
        TerminalEvent::OpenUrl(url) => {
            info!(url = %url, "open-url event");
            renderer.line(MessageStyle::System, &format!("\u{2192} {url}"))?;
        }
        TerminalEvent::OpenTab(item) => {
            info!(id = item.id, "open-tab event");
            renderer.line(
                MessageStyle::System,
                &format!("\u{2192} {} ({})", item.name, item.id),
            )?;
        }
    }
    Ok(())
}
