//! Normalized key events and the status line

/// A key press, independent of the front-end that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Backspace,
    Enter,
}

impl KeyInput {
    /// Map a raw character to a key, ignoring anything that is not a letter
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_lowercase())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Warning,
    Success,
    Error,
}

/// The message shown under the boards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
}

impl Status {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Neutral)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Warning)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Error)
    }

    fn with_tone(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_normalizes() {
        assert_eq!(KeyInput::from_char('Q'), Some(KeyInput::Letter('q')));
        assert_eq!(KeyInput::from_char('\n'), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_char('\u{7f}'), Some(KeyInput::Backspace));
        assert_eq!(KeyInput::from_char('3'), None);
        assert_eq!(KeyInput::from_char('é'), None);
    }

    #[test]
    fn status_constructors_set_tone() {
        assert_eq!(Status::warning("x").tone, Tone::Warning);
        assert_eq!(Status::default().tone, Tone::Neutral);
    }
}
