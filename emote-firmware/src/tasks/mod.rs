//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod indicator;
pub mod rotation;

pub use button::button_task;
pub use indicator::indicator_task;
pub use rotation::rotation_task;
