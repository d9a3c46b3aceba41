//! Styled terminal output.

use anstream::{AutoStream, ColorChoice};
use anstyle::{AnsiColor, Reset, Style};
use anstyle_query::{clicolor, clicolor_force, no_color, term_supports_color};
use anyhow::Result;
use std::io::{self, Write};

use crate::terminal::LineKind;

/// Styles available for rendering messages.
#[derive(Clone, Copy)]
pub enum MessageStyle {
    Info,
    Error,
    Output,
    System,
    Prompt,
    User,
    Assistant,
}

impl MessageStyle {
    fn style(self) -> Style {
        match self {
            Self::Info => AnsiColor::Cyan.on_default(),
            Self::Error => AnsiColor::Red.on_default(),
            Self::Output => Style::new(),
            Self::System => AnsiColor::Cyan.on_default().dimmed(),
            Self::Prompt => AnsiColor::Green.on_default().bold(),
            Self::User => AnsiColor::Blue.on_default(),
            Self::Assistant => AnsiColor::Magenta.on_default(),
        }
    }
}

impl From<LineKind> for MessageStyle {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Input => Self::User,
            LineKind::Output => Self::Output,
            LineKind::Error => Self::Error,
            LineKind::System => Self::System,
            LineKind::Info => Self::Info,
        }
    }
}

/// Renderer with deferred output buffering.
pub struct AnsiRenderer {
    writer: AutoStream<io::Stdout>,
    buffer: String,
    color: bool,
}

impl AnsiRenderer {
    /// Create a new renderer for stdout, honoring the usual color
    /// environment switches.
    pub fn stdout() -> Self {
        let color =
            clicolor_force() || (!no_color() && clicolor().unwrap_or_else(term_supports_color));
        Self::with_color(color)
    }

    /// Create a renderer with color forced on or off.
    pub fn with_color(color: bool) -> Self {
        let choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            writer: AutoStream::new(io::stdout(), choice),
            buffer: String::new(),
            color,
        }
    }

    /// Push text into the buffer.
    pub fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Flush the buffer as one line with the given style.
    pub fn flush(&mut self, style: MessageStyle) -> Result<()> {
        let style = style.style();
        if self.color {
            writeln!(self.writer, "{style}{}{Reset}", self.buffer)?;
        } else {
            writeln!(self.writer, "{}", self.buffer)?;
        }
        self.writer.flush()?;
        self.buffer.clear();
        Ok(())
    }

    /// Convenience for writing a single (possibly multi-line) message.
    pub fn line(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        if text.contains('\n') {
            for line in text.lines() {
                self.buffer.clear();
                self.buffer.push_str(line);
                self.flush(style)?;
            }
            Ok(())
        } else {
            self.buffer.clear();
            self.buffer.push_str(text);
            self.flush(style)
        }
    }

    /// Write styled text without a trailing newline.
    pub fn inline(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        let style = style.style();
        if self.color {
            write!(self.writer, "{style}{text}{Reset}")?;
        } else {
            write!(self.writer, "{text}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Write a raw line without styling.
    pub fn raw_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}
