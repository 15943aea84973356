//! Interactive TUI interface

mod app;
mod keyboard;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use keyboard::{KEY_ROWS, KeyboardState};
