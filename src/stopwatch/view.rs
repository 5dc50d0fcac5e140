//! Presentation of the stopwatch: display region, controls and key help.
//!
//! All styling lives in a [`Styles`] value owned by one stopwatch instance.
//! The container style frames the whole widget and every styled fragment
//! ends with a reset, so the widget neither inherits styling from the
//! surrounding view nor leaks its own into it.

use super::keymap::KeyMap as StopwatchKeyMap;
use super::timekeeper::format;
use super::types::Command;
use crate::error::{Error, Result};
use crate::key::KeyMap;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

const HELP_SEPARATOR: &str = " • ";
const CONTROL_GAP: &str = "  ";

/// Text shown on the three controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label of the start control.
    pub start: String,
    /// Label of the stop control.
    pub stop: String,
    /// Label of the reset control.
    pub reset: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            start: "Start".to_string(),
            stop: "Stop".to_string(),
            reset: "Reset".to_string(),
        }
    }
}

/// Styles for every part of the widget.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Frame around the whole widget.
    pub container: Style,
    /// The `HH:MM:SS` display.
    pub display: Style,
    /// Start control.
    pub start: Style,
    /// Stop control.
    pub stop: Style,
    /// Reset control.
    pub reset: Style,
    /// Key names in the help line.
    pub help_key: Style,
    /// Descriptions in the help line.
    pub help_desc: Style,
    /// Separator between help entries.
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let button = Style::new()
            .foreground(Color::from("#FFFFFF"))
            .bold(true)
            .padding(0, 2, 0, 2);

        Self {
            container: Style::new()
                .border_style(lipgloss::rounded_border())
                .border_foreground(Color::from("#626262"))
                .padding(1, 2, 1, 2),
            display: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#333333",
                    Dark: "#EEEEEE",
                })
                .bold(true)
                .padding(1, 0, 1, 0),
            start: button.clone().background(Color::from("#008B05")),
            stop: button.clone().background(Color::from("#B60C00")),
            reset: button.background(Color::from("#0059A2")),
            help_key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            help_separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// One command affordance.
#[derive(Debug, Clone)]
pub struct Control {
    /// The command this control triggers.
    pub command: Command,
    /// Visible label.
    pub label: String,
    /// Key that triggers the command, shown next to the label. Empty when
    /// the command has no enabled binding.
    pub hint: String,
    style: Style,
}

impl Control {
    /// Renders the control as `label [hint]`, or just the label without a hint.
    pub fn view(&self) -> String {
        if self.hint.is_empty() {
            self.style.render(&self.label)
        } else {
            self.style.render(&format!("{} [{}]", self.label, self.hint))
        }
    }
}

/// The built visual tree of one stopwatch.
#[derive(Debug, Clone)]
pub struct Presentation {
    display: String,
    controls: [Control; 3],
    container: Style,
    display_style: Style,
    help_styles: (Style, Style, Style),
    /// Whether a help line is rendered under the controls.
    pub show_help: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::assemble(Labels::default(), Styles::default(), true)
    }
}

impl Presentation {
    /// Builds the visual tree, rejecting labels that cannot be shown.
    ///
    /// The display starts at `00:00:00` and the controls carry no key hints
    /// until [`Presentation::set_hints`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] when a label is blank or spans
    /// several lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_stopwatch::stopwatch::{Labels, Presentation, Styles};
    ///
    /// let p = Presentation::build(Labels::default(), Styles::default(), true).unwrap();
    /// assert_eq!(p.display(), "00:00:00");
    ///
    /// let blank = Labels { start: " ".to_string(), ..Labels::default() };
    /// assert!(Presentation::build(blank, Styles::default(), true).is_err());
    /// ```
    pub fn build(labels: Labels, styles: Styles, show_help: bool) -> Result<Self> {
        for (command, label) in [
            (Command::Start, &labels.start),
            (Command::Stop, &labels.stop),
            (Command::Reset, &labels.reset),
        ] {
            if label.trim().is_empty() {
                return Err(Error::InvalidLayout {
                    message: format!("{} control has an empty label", command),
                });
            }
            if label.contains('\n') {
                return Err(Error::InvalidLayout {
                    message: format!("{} control label spans several lines", command),
                });
            }
        }
        Ok(Self::assemble(labels, styles, show_help))
    }

    fn assemble(labels: Labels, styles: Styles, show_help: bool) -> Self {
        let Styles {
            container,
            display,
            start,
            stop,
            reset,
            help_key,
            help_desc,
            help_separator,
        } = styles;

        Self {
            display: format(0),
            controls: [
                Control {
                    command: Command::Start,
                    label: labels.start,
                    hint: String::new(),
                    style: start,
                },
                Control {
                    command: Command::Stop,
                    label: labels.stop,
                    hint: String::new(),
                    style: stop,
                },
                Control {
                    command: Command::Reset,
                    label: labels.reset,
                    hint: String::new(),
                    style: reset,
                },
            ],
            container,
            display_style: display,
            help_styles: (help_key, help_desc, help_separator),
            show_help,
        }
    }

    /// Copies each control's key hint from the help text of its binding.
    ///
    /// Disabled bindings leave the hint empty.
    pub fn set_hints(&mut self, keys: &StopwatchKeyMap) {
        for control in self.controls.iter_mut() {
            let binding = keys.binding(control.command);
            control.hint = if binding.enabled() {
                binding.help().key.clone()
            } else {
                String::new()
            };
        }
    }

    /// Replaces the display text verbatim.
    pub fn render(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The start, stop and reset controls, in that order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The control for a command. Toggle has no control of its own.
    pub fn control(&self, command: Command) -> Option<&Control> {
        self.controls.iter().find(|c| c.command == command)
    }

    fn help_view(&self, keys: &dyn KeyMap) -> String {
        let (key_style, desc_style, sep_style) = &self.help_styles;
        let separator = sep_style.render(HELP_SEPARATOR);

        keys.short_help()
            .into_iter()
            .filter(|b| b.enabled() && !b.help().key.is_empty())
            .map(|b| {
                format!(
                    "{} {}",
                    key_style.render(&b.help().key),
                    desc_style.render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Renders the whole widget inside its container.
    pub fn view(&self, keys: &dyn KeyMap) -> String {
        let display = self.display_style.render(&self.display);

        let rendered: Vec<String> = self.controls.iter().map(Control::view).collect();
        let mut row_parts = Vec::new();
        for (i, control) in rendered.iter().enumerate() {
            if i > 0 {
                row_parts.push(CONTROL_GAP);
            }
            row_parts.push(control.as_str());
        }
        let row = lipgloss::join_horizontal(lipgloss::TOP, &row_parts);

        let help = if self.show_help {
            self.help_view(keys)
        } else {
            String::new()
        };

        let mut body_parts = vec![display.as_str(), row.as_str()];
        if !help.is_empty() {
            body_parts.push("");
            body_parts.push(help.as_str());
        }
        let body = lipgloss::join_vertical(lipgloss::CENTER, &body_parts);

        self.container.render(&body)
    }
}
