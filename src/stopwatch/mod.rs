//! Stopwatch component for Bubble Tea applications.
//!
//! A self-contained widget that counts whole seconds and shows them as
//! `HH:MM:SS`, with start, stop and reset controls. It is built from three
//! parts:
//!
//! - [`view`]: the presentation, built once with instance-owned styles.
//! - [`timekeeper`]: the elapsed counter and the one-second tick schedule.
//! - [`model`]: the controller that maps commands onto the timekeeper.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_stopwatch::stopwatch::{self, TimerState};
//!
//! let mut sw = stopwatch::new();
//! assert_eq!(sw.display(), "00:00:00");
//!
//! // Starting returns the command that schedules the first tick.
//! let first_tick = sw.on_start_command();
//! assert!(first_tick.is_some());
//! assert_eq!(sw.state(), TimerState::Running);
//!
//! // A second start is a no-op.
//! assert!(sw.on_start_command().is_none());
//! ```
//!
//! # Custom Labels
//!
//! ```rust
//! use bubbletea_stopwatch::stopwatch::{try_new, with_help, with_labels};
//!
//! let labels = with_labels("Старт", "Стоп", "Сброс");
//! let sw = try_new(vec![labels, with_help(false)]).unwrap();
//! assert!(sw.view().contains("Старт"));
//!
//! assert!(try_new(vec![with_labels("", "Stop", "Reset")]).is_err());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_stopwatch::prelude::*;
//!
//! struct App {
//!     stopwatch: Stopwatch,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut stopwatch = stopwatch_new();
//!         stopwatch.focus();
//!         (Self { stopwatch }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.stopwatch.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.stopwatch.view()
//!     }
//! }
//! ```

pub mod keymap;
pub mod model;
pub mod timekeeper;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap, DEFAULT_KEY_MAP};
pub use model::{
    new, try_new, with_help, with_key_map, with_labels, with_styles, Model, StopwatchOption,
};
pub use timekeeper::{format, parse, TickHandle, TickMsg, Timekeeper, TICK_INTERVAL};
pub use types::{Command, CommandMsg, TimerState};
pub use view::{Control, Labels, Presentation, Styles};
