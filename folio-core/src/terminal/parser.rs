//! Tokenizer for terminal input lines.

use indexmap::IndexMap;

/// Value carried by a `--flag`: either the following token or a bare switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Switch,
}

impl FlagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlagValue::Text(value) => Some(value),
            FlagValue::Switch => None,
        }
    }
}

/// One submitted line, split into a lowercased command name, positional
/// arguments, and flags in appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub args: Vec<String>,
    pub flags: IndexMap<String, FlagValue>,
}

impl ParsedCommand {
    /// True when the flag was given, with or without a value.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// The flag's text value, if the flag was given one.
    pub fn flag_text(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(FlagValue::as_text)
    }
}

/// Split an input line into a [`ParsedCommand`].
///
/// Tokens are separated by runs of whitespace. The first token, lowercased,
/// names the command. `--name` introduces a flag; if the next token exists
/// and does not start with `-` it becomes the flag's value. Tokens starting
/// with a single `-` are dropped without complaint, matching the behavior
/// the terminal has always had. Returns `None` for all-whitespace input.
pub fn parse(input: &str) -> Option<ParsedCommand> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (first, rest) = tokens.split_first()?;

    let command = first.to_lowercase();
    let mut args = Vec::new();
    let mut flags = IndexMap::new();

    let mut index = 0;
    while index < rest.len() {
        let token = rest[index];
        if let Some(name) = token.strip_prefix("--") {
            match rest.get(index + 1) {
                Some(next) if !next.starts_with('-') => {
                    flags.insert(name.to_string(), FlagValue::Text(next.to_string()));
                    index += 1;
                }
                _ => {
                    flags.insert(name.to_string(), FlagValue::Switch);
                }
            }
        } else if !token.starts_with('-') {
            args.push(token.to_string());
        }
        index += 1;
    }

    Some(ParsedCommand {
        command,
        args,
        flags,
    })
}
