#![warn(missing_docs)]

//! # bubbletea-stopwatch
//!
//! A stopwatch component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications: an elapsed-time display in `HH:MM:SS` with start,
//! stop and reset controls, styled with lipgloss and isolated from the
//! surrounding view.
//!
//! The component follows the Elm Architecture pattern with `update()` and
//! `view()` methods. Ticks are scheduled through the bubbletea runtime, one
//! per second, and at most one tick schedule is ever live per stopwatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_stopwatch::prelude::*;
//!
//! let mut sw = stopwatch_new();
//! let _first_tick = sw.on_start_command();
//!
//! // Ticks arrive as messages from the runtime; this simulates one.
//! let tick = sw.tick_msg().unwrap();
//! sw.update(Box::new(tick));
//! assert_eq!(sw.display(), "00:00:01");
//!
//! sw.on_reset_command();
//! assert_eq!(sw.display(), "00:00:00");
//! ```
//!
//! ## Lifecycle
//!
//! Hosts create the widget with [`stopwatch::new`] or [`stopwatch::try_new`]
//! and call [`stopwatch::Model::teardown`] when removing it. Teardown also
//! runs when the model is dropped.

pub mod error;
pub mod key;
pub mod stopwatch;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component reacts to key presses; a blurred one ignores them.
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command to run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use key::{
    new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding, KeyMap, KeyPress,
};
pub use stopwatch::Model as Stopwatch;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_stopwatch::prelude::*;
///
/// let sw: Stopwatch = stopwatch_new();
/// assert_eq!(sw.state(), TimerState::Idle);
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::stopwatch::{
        format as format_elapsed, new as stopwatch_new, try_new as stopwatch_try_new, Command,
        CommandMsg, KeyMap as StopwatchKeyMap, Model as Stopwatch, TickMsg as StopwatchTickMsg,
        TimerState,
    };
    pub use crate::Component;
}
