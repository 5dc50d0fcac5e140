//! Error types for the stopwatch component.
//!
//! Commands and ticks are infallible. The only fallible operation is building
//! a stopwatch from caller-supplied options, see [`crate::stopwatch::try_new`].

use snafu::Snafu;

/// Construction error for the stopwatch component.
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum Error {
    /// The requested layout cannot be rendered (for example an empty label).
    #[snafu(display("Invalid layout: {message}"))]
    InvalidLayout {
        /// What was wrong with the layout.
        message: String,
    },

    /// Two commands would be triggered by the same key press.
    #[snafu(display("Key '{key}' is bound to both {first} and {second}"))]
    ConflictingBinding {
        /// The key shared by both bindings.
        key: String,
        /// The first command using the key.
        first: String,
        /// The second command using the key.
        second: String,
    },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
