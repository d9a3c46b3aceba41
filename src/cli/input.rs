//! Raw-mode line editor for the interactive shell.
//!
//! Reads one command line while keeping the prompt row editable in place,
//! so Up/Down can walk the command history and Tab can complete the
//! command word.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{Write, stdout};

/// Editing request the host resolves against its session state. Returning
/// `None` from the resolver leaves the buffer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditAssist {
    HistoryPrevious,
    HistoryNext,
    Complete,
}

pub(crate) enum InputOutcome {
    Submitted(String),
    ExitSession,
}

#[derive(Default)]
pub(crate) struct ShellInput {
    buffer: String,
    cursor: usize,
}

impl ShellInput {
    pub(crate) fn read_line<F>(&mut self, mut on_assist: F) -> Result<InputOutcome>
    where
        F: FnMut(EditAssist, &str) -> Option<String>,
    {
        enable_raw_mode().context("failed to enable raw mode for shell input")?;
        let mut guard = RawModeGuard(true);
        let mut stdout = stdout();
        stdout.flush().ok();
        let (start_col, start_row) =
            cursor::position().context("failed to read cursor position")?;
        self.buffer.clear();
        self.cursor = 0;

        loop {
            stdout.flush().ok();
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if let Some(outcome) =
                        self.handle_key(key, start_col, start_row, &mut stdout, &mut on_assist)?
                    {
                        guard.0 = false;
                        disable_raw_mode().ok();
                        stdout.write_all(b"\r\n").ok();
                        stdout.flush().ok();
                        return Ok(outcome);
                    }
                }
                Event::Resize(_, _) => {
                    self.refresh(start_col, start_row, &mut stdout)?;
                }
                _ => {}
            }
        }
    }

    fn handle_key<F>(
        &mut self,
        key: KeyEvent,
        start_col: u16,
        start_row: u16,
        stdout: &mut std::io::Stdout,
        on_assist: &mut F,
    ) -> Result<Option<InputOutcome>>
    where
        F: FnMut(EditAssist, &str) -> Option<String>,
    {
        match key.code {
            KeyCode::Enter => {
                let submitted = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                return Ok(Some(InputOutcome::Submitted(submitted)));
            }
            KeyCode::Up => {
                if let Some(recalled) = on_assist(EditAssist::HistoryPrevious, &self.buffer) {
                    self.replace_buffer(recalled);
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Down => {
                if let Some(recalled) = on_assist(EditAssist::HistoryNext, &self.buffer) {
                    self.replace_buffer(recalled);
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Tab => {
                // Completion applies to the bare command word only.
                if !self.buffer.is_empty() && !self.buffer.contains(char::is_whitespace) {
                    if let Some(full) = on_assist(EditAssist::Complete, &self.buffer) {
                        self.replace_buffer(full);
                        self.refresh(start_col, start_row, stdout)?;
                    }
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_boundary(&self.buffer, self.cursor);
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_boundary(&self.buffer, self.cursor);
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.refresh(start_col, start_row, stdout)?;
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                self.refresh(start_col, start_row, stdout)?;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = prev_boundary(&self.buffer, self.cursor);
                    self.buffer.remove(at);
                    self.cursor = at;
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                    self.refresh(start_col, start_row, stdout)?;
                }
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(InputOutcome::ExitSession));
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.buffer.is_empty() {
                    return Ok(Some(InputOutcome::ExitSession));
                }
            }
            KeyCode::Char(ch) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return Ok(None);
                }
                self.buffer.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                self.refresh(start_col, start_row, stdout)?;
            }
            _ => {}
        }

        Ok(None)
    }

    fn replace_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    fn refresh(&self, start_col: u16, start_row: u16, stdout: &mut std::io::Stdout) -> Result<()> {
        let cursor_col =
            u16::try_from(self.buffer[..self.cursor].chars().count()).unwrap_or(u16::MAX);
        crossterm::queue!(stdout, cursor::MoveTo(start_col, start_row))?;
        crossterm::queue!(stdout, Clear(ClearType::UntilNewLine))?;
        stdout.write_all(self.buffer.as_bytes()).ok();
        let final_col = start_col.saturating_add(cursor_col);
        crossterm::queue!(stdout, cursor::MoveTo(final_col, start_row))?;
        stdout.flush().ok();
        Ok(())
    }
}

struct RawModeGuard(bool);

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.0 {
            disable_raw_mode().ok();
        }
    }
}

fn prev_boundary(s: &str, idx: usize) -> usize {
    s[..idx]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(s: &str, idx: usize) -> usize {
    s[idx..]
        .chars()
        .next()
        .map(|ch| idx + ch.len_utf8())
        .unwrap_or_else(|| s.len())
}
