use crate::model::Digit;

/// Semantic input accepted by a drill session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(Digit),
    RemoveLast,
    Submit,
}

impl InputEvent {
    /// Builds a digit-entry event. Values above 9 yield `None`.
    #[must_use]
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).ok().map(Self::Digit)
    }
}

/// Why an input event left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Every question has been answered.
    Complete,
    /// The current answer already holds the maximum number of digits.
    AnswerFull,
    /// Nothing to remove or submit.
    AnswerEmpty,
}

/// Result of applying one input event to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Appended(Digit),
    Removed(Digit),
    Submitted { index: usize, correct: bool },
    Ignored(IgnoreReason),
}

impl InputOutcome {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
