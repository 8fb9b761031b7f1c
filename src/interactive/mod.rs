//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, key_to_event, run_tui};
pub use rendering::ui;
