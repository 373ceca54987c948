use tracing::{debug, info};

use speedmath_core::model::{
    Digit, InputEvent, InputOutcome, Position, Question, Session, SessionSummary,
};

use crate::session_view::SessionSnapshot;

/// Owns a drill session and applies input events to it one at a time.
///
/// Every operation is total: events that cannot apply (session complete,
/// answer full, nothing to remove or submit) leave the session untouched and
/// come back as `InputOutcome::Ignored`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionController {
    session: Session,
}

impl SessionController {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        info!(questions = questions.len(), "drill session started");
        Self {
            session: Session::new(questions),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn apply(&mut self, event: InputEvent) -> InputOutcome {
        let outcome = self.session.apply(event);
        match outcome {
            InputOutcome::Ignored(reason) => {
                debug!(?event, ?reason, "input ignored");
            }
            InputOutcome::Submitted { index, correct } => {
                debug!(index, correct, score = self.score(), "answer submitted");
                if self.session.is_complete() {
                    let summary = self.session.summary();
                    info!(
                        correct = summary.correct,
                        answered = summary.answered,
                        "drill session complete"
                    );
                }
            }
            InputOutcome::Appended(_) | InputOutcome::Removed(_) => {
                debug!(
                    index = self.session.current_index(),
                    answer = self.current_answer().unwrap_or_default(),
                    "answer edited"
                );
            }
        }
        outcome
    }

    pub fn enter_digit(&mut self, digit: Digit) -> InputOutcome {
        self.apply(InputEvent::Digit(digit))
    }

    pub fn remove_last(&mut self) -> InputOutcome {
        self.apply(InputEvent::RemoveLast)
    }

    pub fn submit(&mut self) -> InputOutcome {
        self.apply(InputEvent::Submit)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        self.session.current().map(Question::user_answer)
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        self.session.position(index)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_session(&self.session)
    }
}
