//! Guess session state machine
//!
//! Input events go in, transitions come out. A session never renders anything; the
//! presentation layers read its state after each event.

mod event;
mod state;
mod stats;

pub use event::{GameStatus, InputEvent, Rejection, Transition};
pub use state::{GuessRow, Session};
pub use stats::Statistics;
