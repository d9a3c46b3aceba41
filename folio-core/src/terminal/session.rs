//! Per-session terminal state: scrollback, command history, and the submit
//! protocol.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::constants::terminal;
use crate::profile::Profile;
use crate::terminal::commands::{self, OutputKind, TerminalEvent};
use crate::terminal::parser;

/// Render class of one scrollback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    System,
    Info,
}

/// One rendered line in the scrollback. Lines are append-only; `clear`
/// replaces the whole buffer with the welcome seed.
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub id: u64,
    pub kind: LineKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Owns everything one terminal widget instance needs: the scrollback, the
/// submitted-command history with its recall cursor, and the profile the
/// handlers read.
pub struct TerminalSession {
    profile: Arc<Profile>,
    lines: Vec<TerminalLine>,
    history: Vec<String>,
    /// Recall position, counted from the most recent entry. `None` means the
    /// draft line is untouched by history navigation.
    cursor: Option<usize>,
    next_id: u64,
}

impl TerminalSession {
    pub fn new(profile: Arc<Profile>) -> Self {
        let mut session = Self {
            profile,
            lines: Vec::new(),
            history: Vec::new(),
            cursor: None,
            next_id: 0,
        };
        session.push_line(LineKind::System, terminal::WELCOME.to_string());
        session
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    fn push_line(&mut self, kind: LineKind, content: String) {
        self.next_id += 1;
        self.lines.push(TerminalLine {
            id: self.next_id,
            kind,
            content,
            created_at: Utc::now(),
        });
    }

    /// Submit one input line: echo it, record it in history, and either
    /// clear the scrollback or dispatch it. Returns any events the host
    /// should act on. All-whitespace input is ignored.
    pub fn submit(&mut self, input: &str) -> Vec<TerminalEvent> {
        let line = input.trim();
        if line.is_empty() {
            return Vec::new();
        }

        self.history.push(line.to_string());
        self.cursor = None;
        self.push_line(LineKind::Input, line.to_string());

        // `clear` resets the buffer before dispatch ever sees it.
        if line.eq_ignore_ascii_case("clear") {
            self.lines.clear();
            self.next_id = 0;
            self.push_line(LineKind::System, terminal::WELCOME.to_string());
            return Vec::new();
        }

        let Some(parsed) = parser::parse(line) else {
            return Vec::new();
        };
        let execution = commands::execute(&self.profile, &parsed);
        let kind = match execution.output.kind {
            OutputKind::Error => LineKind::Error,
            OutputKind::Info => LineKind::Info,
            OutputKind::Success => LineKind::Output,
        };
        self.push_line(kind, execution.output.content);
        execution.events
    }

    /// Move the recall cursor toward older entries. Returns the text the
    /// input buffer should now show, or `None` when there is nothing to
    /// recall. Moving past the oldest entry stays on it.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(index) if index + 1 < self.history.len() => index + 1,
            Some(index) => index,
        };
        self.cursor = Some(next);
        Some(self.history[self.history.len() - 1 - next].clone())
    }

    /// Move the recall cursor toward newer entries. Stepping below the
    /// newest entry clears the draft and resets the cursor.
    pub fn recall_next(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some(String::new())
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                Some(self.history[self.history.len() - index].clone())
            }
        }
    }

    /// Tab-completion over the fixed command set.
    pub fn complete(&self, partial: &str) -> Option<&'static str> {
        commands::complete(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TerminalSession {
        TerminalSession::new(Arc::new(Profile::builtin()))
    }

    #[test]
    fn new_session_seeds_the_welcome_line() {
        let session = session();
        assert_eq!(session.lines().len(), 1);
        assert_eq!(session.lines()[0].kind, LineKind::System);
        assert_eq!(session.lines()[0].content, terminal::WELCOME);
    }

    #[test]
    fn submit_echoes_input_then_output() {
        let mut session = session();
        session.submit("about");
        let lines = session.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].kind, LineKind::Input);
        assert_eq!(lines[1].content, "about");
        assert_eq!(lines[2].kind, LineKind::Output);
    }

    #[test]
    fn error_and_info_outputs_map_to_their_line_kinds() {
        let mut session = session();
        session.submit("nope");
        assert_eq!(session.lines().last().map(|l| l.kind), Some(LineKind::Error));
        session.submit("help");
        assert_eq!(session.lines().last().map(|l| l.kind), Some(LineKind::Info));
    }

    #[test]
    fn whitespace_submission_is_ignored() {
        let mut session = session();
        session.submit("   ");
        assert_eq!(session.lines().len(), 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_resets_to_the_seed_but_keeps_history() {
        let mut session = session();
        session.submit("about");
        session.submit("clear");
        assert_eq!(session.lines().len(), 1);
        assert_eq!(session.lines()[0].content, terminal::WELCOME);
        assert_eq!(session.history(), &["about".to_string(), "clear".to_string()]);
    }

    #[test]
    fn recall_walks_most_recent_first_and_sticks_at_oldest() {
        let mut session = session();
        for cmd in ["a", "b", "c"] {
            session.submit(cmd);
        }
        assert_eq!(session.recall_previous().as_deref(), Some("c"));
        assert_eq!(session.recall_previous().as_deref(), Some("b"));
        assert_eq!(session.recall_previous().as_deref(), Some("a"));
        // A fourth press stays on the oldest entry.
        assert_eq!(session.recall_previous().as_deref(), Some("a"));
    }

    #[test]
    fn recall_next_steps_back_down_and_clears_the_draft() {
        let mut session = session();
        for cmd in ["a", "b"] {
            session.submit(cmd);
        }
        session.recall_previous(); // "b"
        session.recall_previous(); // "a"
        assert_eq!(session.recall_next().as_deref(), Some("b"));
        assert_eq!(session.recall_next().as_deref(), Some(""));
        // Cursor is reset; another down-step changes nothing.
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn recall_on_empty_history_is_a_no_op() {
        let mut session = session();
        assert_eq!(session.recall_previous(), None);
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn submission_resets_the_recall_cursor() {
        let mut session = session();
        session.submit("a");
        session.recall_previous();
        session.submit("b");
        assert_eq!(session.recall_previous().as_deref(), Some("b"));
    }

    #[test]
    fn events_surface_from_side_effect_commands() {
        let mut session = session();
        let events = session.submit("github");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TerminalEvent::OpenUrl(_)));
    }
}
