//! NEXTGEN TUI - terminal front-end for the signal generator
//!
//! - Login gate in front of everything else
//! - Parameter form (asset, count, direction filter, backtest filter)
//! - Background worker running the artificial delay
//! - Signal list with clipboard export over OSC 52

pub mod app;
pub mod clipboard;
pub mod input;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use clipboard::{system_clipboard, Clipboard, ClipboardError, MemoryClipboard};
pub use input::handle_key;
pub use theme::Theme;
