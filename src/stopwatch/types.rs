//! Message and state types for the stopwatch component.

use std::fmt;

/// Lifecycle state of a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Never started, or reset since. Elapsed time is zero.
    #[default]
    Idle,
    /// A tick is scheduled and the counter advances once per second.
    Running,
    /// Stopped after running. Elapsed time is kept.
    Stopped,
}

/// A zero-argument command a host can send to the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin counting. No-op while running.
    Start,
    /// Freeze the counter. No-op unless running.
    Stop,
    /// Stop and zero the counter.
    Reset,
    /// Start when not running, stop otherwise.
    Toggle,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Reset => "reset",
            Command::Toggle => "toggle",
        };
        f.write_str(name)
    }
}

/// Delivers a [`Command`] to a stopwatch through the message loop.
///
/// An `id` of 0 addresses every stopwatch that receives the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMsg {
    /// Target instance id, or 0 for all.
    pub id: i64,
    /// The command to run.
    pub command: Command,
}
