use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use speedmath_core::model::{OPERAND_MAX, OPERAND_MIN, Operand, Question};

/// Draws addition questions with operands uniform in `OPERAND_MIN..=OPERAND_MAX`.
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = StdRng> {
    rng: R,
}

impl QuestionGenerator<StdRng> {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Generator that replays the same questions for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuestionGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> Question {
        let left = self.draw_operand();
        let right = self.draw_operand();
        Question::from_operands(left, right)
    }

    fn draw_operand(&mut self) -> Operand {
        Operand::clamped(self.rng.random_range(OPERAND_MIN..=OPERAND_MAX))
    }

    pub fn generate_batch(&mut self, count: usize) -> Vec<Question> {
        (0..count).map(|_| self.generate()).collect()
    }
}
