//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (wall clock for the puzzle timer)
//! - Pointer input (cursor position inside the play area)

pub mod clock;
pub mod pointer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use pointer::PointerState;
