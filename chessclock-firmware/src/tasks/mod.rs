//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod alarm;
pub mod buttons;
pub mod display;
pub mod indicator;
pub mod input;
pub mod tick;

pub use alarm::alarm_task;
pub use buttons::button_task;
pub use display::display_task;
pub use indicator::indicator_task;
pub use input::input_task;
pub use tick::tick_task;
