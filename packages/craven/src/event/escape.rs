use std::borrow::Cow;

use crate::error::PayloadError;

/// Scanner state: whether the previous character was an unescaped backslash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    Normal,
    AfterBackslash,
}

impl EscapeState {
    /// Advances the automaton by one character.
    /// Returns the next state and whether `c` is a quote needing a backslash.
    fn step(self, c: char) -> (Self, bool) {
        match (self, c) {
            (EscapeState::AfterBackslash, _) => (EscapeState::Normal, false),
            (EscapeState::Normal, '\\') => (EscapeState::AfterBackslash, false),
            (EscapeState::Normal, '"') => (EscapeState::Normal, true),
            (EscapeState::Normal, _) => (EscapeState::Normal, false),
        }
    }
}

/// Escapes every unescaped `"` in `message` as `\"`.
///
/// Only double quotes are touched. A backslash protects the character after
/// it, so `\"` and `\\` are left as they are. Other JSON-significant
/// characters (newlines, control characters) pass through unchanged.
pub fn escape_double_quotes(message: &str) -> Result<Cow<'_, str>, PayloadError> {
    let quotes = count_unescaped_quotes(message);
    if quotes == 0 {
        return Ok(Cow::Borrowed(message));
    }

    let mut escaped = String::new();
    escaped.try_reserve_exact(message.len() + quotes)?;

    let mut state = EscapeState::Normal;
    for c in message.chars() {
        let (next, needs_escape) = state.step(c);
        if needs_escape {
            escaped.push('\\');
        }
        escaped.push(c);
        state = next;
    }

    Ok(Cow::Owned(escaped))
}

fn count_unescaped_quotes(message: &str) -> usize {
    let mut state = EscapeState::Normal;
    let mut quotes = 0;
    for c in message.chars() {
        let (next, needs_escape) = state.step(c);
        if needs_escape {
            quotes += 1;
        }
        state = next;
    }
    quotes
}
