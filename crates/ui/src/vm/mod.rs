mod drill_vm;
mod keymap;

pub use drill_vm::{DrillVm, ROW_HEIGHT_PX, RowVm};
pub use keymap::{forward_key, input_for_key};
