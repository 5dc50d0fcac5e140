//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses with the help text shown for
//! them. Components expose their bindings through the [`KeyMap`] trait so a
//! host can render help or check for conflicts.
//!
//! Character keys are case-insensitive: terminals report an uppercase letter
//! as the character plus SHIFT, and caps lock flips the case, so `"s"`, `"S"`
//! and `"shift+s"` all describe the same key.
//!
//! ```rust
//! use bubbletea_stopwatch::key::{new_binding, with_help, with_keys_str};
//!
//! let start = new_binding(vec![with_keys_str(&["s", "enter"]), with_help("s", "start")]);
//! assert_eq!(start.help().key, "s");
//! assert_eq!(start.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;

// Names accepted by `KeyPress::parse` and printed by `Display`.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("space", KeyCode::Char(' ')),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("insert", KeyCode::Insert),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pgup", KeyCode::PageUp),
    ("pgdown", KeyCode::PageDown),
];

fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// A single key press: a key code plus modifiers.
///
/// Presses built with [`KeyPress::new`], [`KeyPress::with_modifiers`] or
/// [`KeyPress::parse`] are normalized: character keys are lowercase and never
/// carry SHIFT, and shift+tab is `BackTab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press without modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    /// Creates a normalized key press.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(c) => Self {
                code: KeyCode::Char(lowercase(c)),
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            },
            KeyCode::BackTab => Self {
                code,
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            },
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => Self {
                code: KeyCode::BackTab,
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => Self { code, modifiers },
        }
    }

    /// The normalized press a key message describes.
    pub fn from_msg(msg: &KeyMsg) -> Self {
        Self::with_modifiers(msg.key, msg.modifiers)
    }

    /// Parses a key description such as `"s"`, `"space"`, `"f5"` or `"ctrl+r"`.
    ///
    /// Returns `None` for names that do not map to a key code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_stopwatch::key::KeyPress;
    ///
    /// assert_eq!(KeyPress::parse("S"), KeyPress::parse("s"));
    /// assert_eq!(KeyPress::parse("shift+s"), KeyPress::parse("s"));
    /// assert!(KeyPress::parse("hyper+q").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let named = NAMED_KEYS
            .iter()
            .find(|(name, _)| *name == rest)
            .map(|(_, code)| *code);

        let code = match named {
            Some(code) => code,
            None if rest == " " => KeyCode::Char(' '),
            None => {
                let function = rest
                    .strip_prefix('f')
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| (1..=24).contains(n));
                let mut chars = rest.chars();
                match (function, chars.next(), chars.next()) {
                    (Some(n), _, _) => KeyCode::F(n),
                    (None, Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self::with_modifiers(code, modifiers))
    }

    /// Whether this press matches an incoming key message.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        Self::with_modifiers(self.code, self.modifiers) == Self::from_msg(msg)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, code)| *code == self.code) {
            return f.write_str(name);
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "f{}", n),
            other => write!(f, "{}", format!("{:?}", other).to_lowercase()),
        }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"s"`.
    pub key: String,
    /// What the binding does, e.g. `"start"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    unknown_keys: Vec<String>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Adds key presses.
    Keys(Vec<KeyPress>),
    /// Adds keys by name, parsed with [`KeyPress::parse`].
    KeyNames(Vec<String>),
    /// Sets help text.
    Help(Help),
    /// Starts the binding disabled.
    Disabled,
}

/// Keys from string descriptions.
///
/// Names that do not parse are kept on the binding and reported by
/// [`Binding::unknown_keys`].
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::KeyNames(keys.iter().map(|k| k.to_string()).collect())
}

/// Keys from key codes without modifiers.
pub fn with_keys(keys: Vec<KeyCode>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(KeyPress::new).collect())
}

/// Help text for the binding.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Creates the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys.extend(keys),
            BindingOpt::KeyNames(names) => {
                for name in names {
                    match KeyPress::parse(&name) {
                        Some(press) => binding.keys.push(press),
                        None => binding.unknown_keys.push(name),
                    }
                }
            }
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

impl Binding {
    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Key names given to [`with_keys_str`] that did not parse.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Replaces the help text.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether the binding was explicitly disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }

    /// The first key press shared with `other`, if both are enabled.
    pub fn overlap(&self, other: &Binding) -> Option<KeyPress> {
        if !self.enabled() || !other.enabled() {
            return None;
        }
        let normalize = |k: &KeyPress| KeyPress::with_modifiers(k.code, k.modifiers);
        self.keys
            .iter()
            .map(normalize)
            .find(|k| other.keys.iter().map(normalize).any(|o| o == *k))
    }
}

/// Whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Components that expose their key bindings for help rendering.
pub trait KeyMap {
    /// Bindings for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
