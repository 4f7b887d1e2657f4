//! Countdown to the next Christmas morning in the visitor's timezone.

mod component;
mod timer;

pub use component::CountdownTimer;
pub use timer::{TimeLeft, local_now, next_christmas, time_left};
