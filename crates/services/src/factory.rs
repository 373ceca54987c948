use std::sync::{Mutex, PoisonError};

use tracing::info;

use speedmath_core::model::SESSION_LENGTH;

use crate::controller::SessionController;
use crate::generator::QuestionGenerator;

/// Starts drill sessions from one shared question generator.
///
/// A seeded factory replays the same sequence of drills across runs.
#[derive(Debug)]
pub struct SessionFactory {
    generator: Mutex<QuestionGenerator>,
    session_length: usize,
}

impl SessionFactory {
    #[must_use]
    pub fn new(generator: QuestionGenerator) -> Self {
        Self {
            generator: Mutex::new(generator),
            session_length: SESSION_LENGTH,
        }
    }

    /// Factory backed by a seeded generator when `seed` is set, OS entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!(seed, "using seeded question generator");
                Self::new(QuestionGenerator::seeded(seed))
            }
            None => Self::new(QuestionGenerator::from_os_rng()),
        }
    }

    #[must_use]
    pub fn session_length(&self) -> usize {
        self.session_length
    }

    /// Draws a fresh batch of questions and wraps them in a controller.
    pub fn start(&self) -> SessionController {
        // A poisoned lock still guards a usable RNG.
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        SessionController::new(generator.generate_batch(self.session_length))
    }
}
