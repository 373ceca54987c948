mod answer;
mod digit;
mod input;
mod question;
mod session;

pub use answer::{AnswerBuffer, MAX_ANSWER_LEN};
pub use digit::{Digit, DigitError};
pub use input::{IgnoreReason, InputEvent, InputOutcome};
pub use question::{OPERAND_MAX, OPERAND_MIN, Operand, Question, QuestionError};
pub use session::{Position, SESSION_LENGTH, Session, SessionSummary};
