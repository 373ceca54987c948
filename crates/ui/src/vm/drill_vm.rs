use services::{RowTone, SessionController};
use speedmath_core::model::{InputEvent, InputOutcome};

/// Vertical distance between two question rows.
pub const ROW_HEIGHT_PX: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowVm {
    pub index: usize,
    pub prompt: String,
    pub answer: String,
    pub tone: RowTone,
}

impl RowVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            RowTone::Correct => "drill-row drill-row--correct",
            RowTone::Incorrect => "drill-row drill-row--incorrect",
            RowTone::Current => "drill-row drill-row--current",
            RowTone::Upcoming => "drill-row drill-row--upcoming",
        }
    }
}

pub struct DrillVm {
    controller: SessionController,
}

impl DrillVm {
    #[must_use]
    pub fn new(controller: SessionController) -> Self {
        Self { controller }
    }

    pub fn apply(&mut self, event: InputEvent) -> InputOutcome {
        self.controller.apply(event)
    }

    #[must_use]
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    #[must_use]
    pub fn rows(&self) -> Vec<RowVm> {
        self.controller
            .snapshot()
            .rows
            .into_iter()
            .map(|row| RowVm {
                index: row.index,
                prompt: row.padded_text(),
                answer: row.user_answer,
                tone: row.tone,
            })
            .collect()
    }

    /// Upward shift of the row column so the current row stays anchored.
    #[must_use]
    pub fn scroll_offset_px(&self) -> usize {
        self.controller.current_index() * ROW_HEIGHT_PX
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.controller.score())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.controller.is_complete()
    }

    #[must_use]
    pub fn summary_label(&self) -> String {
        let summary = self.controller.summary();
        format!("{} / {} correct", summary.correct, summary.answered)
    }
}
