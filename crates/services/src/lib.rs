#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod factory;
pub mod generator;
pub mod input_queue;
pub mod session_view;

pub use controller::SessionController;
pub use error::InputQueueError;
pub use factory::SessionFactory;
pub use generator::QuestionGenerator;
pub use input_queue::{InputQueue, InputSender, input_channel};
pub use session_view::{QuestionRow, RowTone, SessionSnapshot};
