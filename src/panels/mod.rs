pub mod controls;
mod tasks;
mod util;

pub use controls::CONTROLS_HEIGHT;
pub use tasks::TasksPanel;
pub use util::{FocusId, KeyHandleResult};
