use crate::model::{Digit, IgnoreReason, InputEvent, InputOutcome, Question};

/// Number of questions in a freshly started drill.
pub const SESSION_LENGTH: usize = 50;

/// Where a question sits relative to the session cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Answered,
    Current,
    Upcoming,
}

/// Counts over the answered part of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
}

/// Ordered questions plus the cursor pointing at the current one.
///
/// Questions before the cursor are answered and frozen. Input events only
/// reach the question at the cursor; once the cursor passes the last
/// question every event is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
}

impl Session {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question receiving input, or `None` once the session is complete.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Position of the question at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        if index >= self.questions.len() {
            return None;
        }
        Some(match index.cmp(&self.current) {
            std::cmp::Ordering::Less => Position::Answered,
            std::cmp::Ordering::Equal => Position::Current,
            std::cmp::Ordering::Greater => Position::Upcoming,
        })
    }

    /// Number of answered questions whose typed answer matches exactly.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answered().iter().filter(|q| q.is_correct()).count()
    }

    #[must_use]
    pub fn answered(&self) -> &[Question] {
        &self.questions[..self.current]
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let answered = self.current;
        let correct = self.score();
        SessionSummary {
            total: self.questions.len(),
            answered,
            correct,
            incorrect: answered - correct,
        }
    }

    pub fn apply(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Digit(digit) => self.enter_digit(digit),
            InputEvent::RemoveLast => self.remove_last(),
            InputEvent::Submit => self.submit(),
        }
    }

    /// Appends a digit to the current answer unless it is already full.
    pub fn enter_digit(&mut self, digit: Digit) -> InputOutcome {
        let Some(question) = self.questions.get_mut(self.current) else {
            return InputOutcome::Ignored(IgnoreReason::Complete);
        };
        if question.push_digit(digit) {
            InputOutcome::Appended(digit)
        } else {
            InputOutcome::Ignored(IgnoreReason::AnswerFull)
        }
    }

    /// Drops the last digit of the current answer.
    pub fn remove_last(&mut self) -> InputOutcome {
        let Some(question) = self.questions.get_mut(self.current) else {
            return InputOutcome::Ignored(IgnoreReason::Complete);
        };
        question
            .pop_digit()
            .map_or(InputOutcome::Ignored(IgnoreReason::AnswerEmpty), InputOutcome::Removed)
    }

    /// Freezes the current answer and moves the cursor forward by one.
    pub fn submit(&mut self) -> InputOutcome {
        let Some(question) = self.questions.get(self.current) else {
            return InputOutcome::Ignored(IgnoreReason::Complete);
        };
        if question.answer().is_empty() {
            return InputOutcome::Ignored(IgnoreReason::AnswerEmpty);
        }
        let outcome = InputOutcome::Submitted {
            index: self.current,
            correct: question.is_correct(),
        };
        self.current += 1;
        outcome
    }
}
