//! Key bindings for the stopwatch component.

use super::types::Command;
use crate::error::{Error, Result};
use crate::key::{self, new_binding, with_help, with_keys_str, Binding};
use bubbletea_rs::KeyMsg;
use once_cell::sync::Lazy;

/// Key bindings for the stopwatch commands.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Start counting.
    pub start: Binding,
    /// Stop counting.
    pub stop: Binding,
    /// Reset to zero.
    pub reset: Binding,
    /// Start or stop depending on the current state.
    pub toggle: Binding,
}

/// The default bindings: `s` start, `x` stop, `r` reset, `space` toggle.
pub static DEFAULT_KEY_MAP: Lazy<KeyMap> = Lazy::new(|| KeyMap {
    start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
    stop: new_binding(vec![with_keys_str(&["x"]), with_help("x", "stop")]),
    reset: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
    toggle: new_binding(vec![with_keys_str(&["space"]), with_help("space", "start/stop")]),
});

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// A copy of [`DEFAULT_KEY_MAP`].
pub fn default_key_map() -> KeyMap {
    DEFAULT_KEY_MAP.clone()
}

impl KeyMap {
    fn entries(&self) -> [(Command, &Binding); 4] {
        [
            (Command::Start, &self.start),
            (Command::Stop, &self.stop),
            (Command::Reset, &self.reset),
            (Command::Toggle, &self.toggle),
        ]
    }

    /// The binding for a command.
    pub fn binding(&self, command: Command) -> &Binding {
        match command {
            Command::Start => &self.start,
            Command::Stop => &self.stop,
            Command::Reset => &self.reset,
            Command::Toggle => &self.toggle,
        }
    }

    /// The command bound to a key press, if any.
    pub fn command_for(&self, msg: &KeyMsg) -> Option<Command> {
        self.entries()
            .into_iter()
            .find(|(_, binding)| binding.matches(msg))
            .map(|(command, _)| command)
    }

    /// Checks that every command is reachable by exactly its own keys.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLayout`] when a binding names a key that does not
    ///   parse, or a binding that was not disabled has no keys.
    /// - [`Error::ConflictingBinding`] when two enabled bindings share a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_stopwatch::key::{new_binding, with_disabled, with_keys_str};
    /// use bubbletea_stopwatch::stopwatch::default_key_map;
    ///
    /// let mut keys = default_key_map();
    /// assert!(keys.validate().is_ok());
    ///
    /// keys.toggle = new_binding(vec![with_disabled()]);
    /// assert!(keys.validate().is_ok());
    ///
    /// keys.start = new_binding(vec![with_keys_str(&["hyper+s"])]);
    /// assert!(keys.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let entries = self.entries();
        for (command, binding) in entries.iter() {
            if let Some(name) = binding.unknown_keys().first() {
                return Err(Error::InvalidLayout {
                    message: format!("{} binding has unknown key '{}'", command, name),
                });
            }
            if !binding.disabled() && binding.keys().is_empty() {
                return Err(Error::InvalidLayout {
                    message: format!("{} binding has no keys", command),
                });
            }
        }

        for (i, (first, a)) in entries.iter().enumerate() {
            for (second, b) in entries.iter().skip(i + 1) {
                if let Some(press) = a.overlap(b) {
                    return Err(Error::ConflictingBinding {
                        key: press.to_string(),
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.start, &self.stop, &self.reset, &self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.start, &self.stop, &self.toggle], vec![&self.reset]]
    }
}
