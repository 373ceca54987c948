use crate::model::Digit;

/// Maximum number of digits a user answer can hold.
pub const MAX_ANSWER_LEN: usize = 3;

/// Digits typed for a question, capped at [`MAX_ANSWER_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBuffer {
    text: String,
}

impl AnswerBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit. Returns `false` when the buffer is already full.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(digit.as_char());
        true
    }

    /// Removes and returns the last digit, if any.
    pub fn pop(&mut self) -> Option<Digit> {
        self.text
            .pop()
            .and_then(|ch| Digit::try_from(ch).ok())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.text.len() >= MAX_ANSWER_LEN
    }
}
