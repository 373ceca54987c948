use thiserror::Error;

use crate::model::{AnswerBuffer, Digit};

/// Smallest operand a question can hold.
pub const OPERAND_MIN: u8 = 1;
/// Largest operand a question can hold.
pub const OPERAND_MAX: u8 = 10;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("operand {value} outside 1..=10")]
    OperandOutOfRange { value: u8 },
}

//
// ─── OPERAND ──────────────────────────────────────────────────────────────────
//

/// An addition operand, always within `OPERAND_MIN..=OPERAND_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Operand(u8);

impl Operand {
    /// # Errors
    ///
    /// Returns `QuestionError::OperandOutOfRange` outside `OPERAND_MIN..=OPERAND_MAX`.
    pub fn new(value: u8) -> Result<Self, QuestionError> {
        if !(OPERAND_MIN..=OPERAND_MAX).contains(&value) {
            return Err(QuestionError::OperandOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Pins `value` to the nearest bound when it falls outside the range.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(OPERAND_MIN, OPERAND_MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// One addition problem together with the answer typed for it.
///
/// The expected answer is fixed when the question is built. Only the typed
/// answer changes, and only while the question is current in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    left: u8,
    right: u8,
    expected_answer: String,
    user_answer: AnswerBuffer,
}

impl Question {
    /// Builds a question from explicit operands.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OperandOutOfRange` if either operand is outside
    /// `OPERAND_MIN..=OPERAND_MAX`.
    pub fn new(left: u8, right: u8) -> Result<Self, QuestionError> {
        Ok(Self::from_operands(Operand::new(left)?, Operand::new(right)?))
    }

    /// Builds a question from operands that are already in range.
    #[must_use]
    pub fn from_operands(left: Operand, right: Operand) -> Self {
        let (left, right) = (left.value(), right.value());
        Self {
            left,
            right,
            expected_answer: (u16::from(left) + u16::from(right)).to_string(),
            user_answer: AnswerBuffer::new(),
        }
    }

    #[must_use]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u8 {
        self.right
    }

    #[must_use]
    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    #[must_use]
    pub fn user_answer(&self) -> &str {
        self.user_answer.as_str()
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerBuffer {
        &self.user_answer
    }

    /// Exact string comparison between typed and expected answers.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.user_answer.as_str() == self.expected_answer
    }

    /// Prompt shown next to the answer box, e.g. `"3 + 4 = "`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} + {} = ", self.left, self.right)
    }

    /// Number of single-digit operands. Used to right-align prompts.
    #[must_use]
    pub fn padding(&self) -> usize {
        [self.left, self.right]
            .iter()
            .filter(|value| **value < 10)
            .count()
    }

    pub(crate) fn push_digit(&mut self, digit: Digit) -> bool {
        self.user_answer.push(digit)
    }

    pub(crate) fn pop_digit(&mut self) -> Option<Digit> {
        self.user_answer.pop()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
