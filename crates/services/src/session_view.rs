use speedmath_core::model::{Position, Question, Session};

/// Display state of a row, combining position and correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    Correct,
    Incorrect,
    Current,
    Upcoming,
}

impl RowTone {
    #[must_use]
    pub fn for_question(question: &Question, position: Position) -> Self {
        match position {
            Position::Answered if question.is_correct() => Self::Correct,
            Position::Answered => Self::Incorrect,
            Position::Current => Self::Current,
            Position::Upcoming => Self::Upcoming,
        }
    }
}

/// Presentation-agnostic row for one question.
///
/// Carries raw strings only; the UI decides fonts, colors and offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub index: usize,
    pub text: String,
    pub padding: usize,
    pub user_answer: String,
    pub position: Position,
    pub tone: RowTone,
}

impl QuestionRow {
    /// Prompt text left-padded so prompts line up in a monospaced column.
    #[must_use]
    pub fn padded_text(&self) -> String {
        format!("{}{}", " ".repeat(self.padding), self.text)
    }
}

/// Read-only render model of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub rows: Vec<QuestionRow>,
    pub score: usize,
    pub current_index: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let rows = session
            .questions()
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                let position = session.position(index)?;
                Some(QuestionRow {
                    index,
                    text: question.text(),
                    padding: question.padding(),
                    user_answer: question.user_answer().to_string(),
                    position,
                    tone: RowTone::for_question(question, position),
                })
            })
            .collect();

        Self {
            rows,
            score: session.score(),
            current_index: session.current_index(),
            total: session.len(),
            is_complete: session.is_complete(),
        }
    }
}
