//! The stopwatch model: routes commands and ticks to the timekeeper and keeps
//! the presentation in sync.

use super::keymap::{default_key_map, KeyMap};
use super::timekeeper::{format, TickHandle, TickMsg, Timekeeper};
use super::types::{Command, CommandMsg, TimerState};
use super::view::{Labels, Presentation, Styles};
use crate::error::Result;
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// Construction option for [`try_new`].
pub enum StopwatchOption {
    /// Control labels.
    WithLabels(Labels),
    /// Widget styles.
    WithStyles(Box<Styles>),
    /// Key bindings.
    WithKeyMap(KeyMap),
    /// Whether to render the key help line.
    WithHelp(bool),
}

/// Sets the start, stop and reset labels.
pub fn with_labels(
    start: impl Into<String>,
    stop: impl Into<String>,
    reset: impl Into<String>,
) -> StopwatchOption {
    StopwatchOption::WithLabels(Labels {
        start: start.into(),
        stop: stop.into(),
        reset: reset.into(),
    })
}

/// Sets the widget styles.
pub fn with_styles(styles: Styles) -> StopwatchOption {
    StopwatchOption::WithStyles(Box::new(styles))
}

/// Sets the key bindings.
pub fn with_key_map(key_map: KeyMap) -> StopwatchOption {
    StopwatchOption::WithKeyMap(key_map)
}

/// Shows or hides the key help line.
pub fn with_help(show: bool) -> StopwatchOption {
    StopwatchOption::WithHelp(show)
}

/// A stopwatch counting whole seconds, displayed as `HH:MM:SS`.
///
/// The model is driven by the bubbletea message loop: forward every message
/// to [`Model::update`], run the returned command, and draw [`Model::view`].
/// Call [`Model::teardown`] when the widget is removed.
#[derive(Debug)]
pub struct Model {
    timekeeper: Timekeeper,
    state: TimerState,
    presentation: Presentation,
    key_map: KeyMap,
    focus: bool,
    mounted: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle stopwatch with the default look and key bindings.
    pub fn new() -> Self {
        Self::from_parts(Presentation::default(), default_key_map())
    }

    fn from_parts(mut presentation: Presentation, key_map: KeyMap) -> Self {
        presentation.set_hints(&key_map);
        let m = Self {
            timekeeper: Timekeeper::new(),
            state: TimerState::Idle,
            presentation,
            key_map,
            focus: false,
            mounted: true,
        };
        tracing::debug!(id = m.id(), "stopwatch created");
        m
    }

    /// Creates a stopwatch from options, validating labels and key bindings.
    pub fn new_with_options(opts: Vec<StopwatchOption>) -> Result<Self> {
        let mut labels = Labels::default();
        let mut styles = Styles::default();
        let mut key_map = default_key_map();
        let mut show_help = true;

        for opt in opts {
            match opt {
                StopwatchOption::WithLabels(l) => labels = l,
                StopwatchOption::WithStyles(s) => styles = *s,
                StopwatchOption::WithKeyMap(k) => key_map = k,
                StopwatchOption::WithHelp(h) => show_help = h,
            }
        }

        let built = key_map
            .validate()
            .and_then(|()| Presentation::build(labels, styles, show_help));
        match built {
            Ok(presentation) => Ok(Self::from_parts(presentation, key_map)),
            Err(err) => {
                tracing::warn!(error = %err, "stopwatch construction failed");
                Err(err)
            }
        }
    }

    /// Unique id of this stopwatch, used to route messages.
    pub fn id(&self) -> i64 {
        self.timekeeper.id()
    }

    /// Whole seconds counted since the last reset.
    pub fn elapsed(&self) -> u64 {
        self.timekeeper.elapsed()
    }

    /// Elapsed time as a duration.
    pub fn elapsed_duration(&self) -> Duration {
        Duration::from_secs(self.elapsed())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether a tick is scheduled.
    pub fn running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Whether the widget is still mounted. False after [`Model::teardown`].
    pub fn mounted(&self) -> bool {
        self.mounted
    }

    /// The live tick schedule, if running.
    pub fn tick_handle(&self) -> Option<TickHandle> {
        self.timekeeper.handle()
    }

    /// The tick message the live schedule would deliver next.
    pub fn tick_msg(&self) -> Option<TickMsg> {
        self.timekeeper.handle().map(|h| h.tick_msg())
    }

    /// The text currently shown in the display region.
    pub fn display(&self) -> &str {
        self.presentation.display()
    }

    /// The built presentation.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Key bindings for the commands.
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Replaces the key bindings and refreshes the control hints.
    ///
    /// # Errors
    ///
    /// Fails like [`try_new`] on unknown, missing or conflicting keys. The
    /// current bindings stay in place on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_stopwatch::key::{new_binding, with_help, with_keys_str};
    /// use bubbletea_stopwatch::stopwatch::{self, default_key_map, Command};
    ///
    /// let mut sw = stopwatch::new();
    /// let mut keys = default_key_map();
    /// keys.start = new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "start")]);
    /// sw.set_key_map(keys).unwrap();
    ///
    /// let start = sw.presentation().control(Command::Start).unwrap();
    /// assert_eq!(start.hint, "enter");
    /// ```
    pub fn set_key_map(&mut self, key_map: KeyMap) -> Result<()> {
        key_map.validate()?;
        self.presentation.set_hints(&key_map);
        self.key_map = key_map;
        Ok(())
    }

    /// Shows or hides the key help line.
    pub fn set_show_help(&mut self, show: bool) {
        self.presentation.show_help = show;
    }

    /// Starts counting. Returns the first tick command, or `None` when
    /// already running or torn down.
    pub fn on_start_command(&mut self) -> Option<Cmd> {
        if !self.mounted {
            return None;
        }
        let handle = self.timekeeper.start()?;
        self.state = TimerState::Running;
        tracing::debug!(id = self.id(), tag = handle.tag(), "stopwatch started");
        Some(handle.schedule())
    }

    /// Stops counting and keeps the elapsed time.
    pub fn on_stop_command(&mut self) {
        if self.timekeeper.stop() {
            self.state = TimerState::Stopped;
            tracing::debug!(id = self.id(), elapsed = self.elapsed(), "stopwatch stopped");
        }
    }

    /// Stops counting and shows zero.
    pub fn on_reset_command(&mut self) {
        if !self.mounted {
            return;
        }
        self.timekeeper.reset();
        self.state = TimerState::Idle;
        self.presentation.render(&format(self.timekeeper.elapsed()));
        tracing::debug!(id = self.id(), "stopwatch reset");
    }

    /// Stops when running, starts otherwise.
    pub fn on_toggle_command(&mut self) -> Option<Cmd> {
        if self.running() {
            self.on_stop_command();
            None
        } else {
            self.on_start_command()
        }
    }

    /// Runs a command.
    pub fn dispatch(&mut self, command: Command) -> Option<Cmd> {
        match command {
            Command::Start => self.on_start_command(),
            Command::Stop => {
                self.on_stop_command();
                None
            }
            Command::Reset => {
                self.on_reset_command();
                None
            }
            Command::Toggle => self.on_toggle_command(),
        }
    }

    /// Cancels any live tick and detaches the widget. Idempotent.
    ///
    /// Hosts call this when removing the widget. Dropping the model calls it
    /// too. A running stopwatch ends up `Stopped` with its elapsed time kept,
    /// and every later command, key press or tick is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_stopwatch::stopwatch::{self, TimerState};
    ///
    /// let mut sw = stopwatch::new();
    /// sw.on_start_command();
    /// let tick = sw.tick_msg().unwrap();
    ///
    /// sw.teardown();
    /// assert!(!sw.mounted());
    /// assert_eq!(sw.state(), TimerState::Stopped);
    ///
    /// // The in-flight tick no longer counts.
    /// assert!(sw.update(Box::new(tick)).is_none());
    /// assert_eq!(sw.elapsed(), 0);
    /// ```
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        let cancelled = self.timekeeper.stop();
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
        self.mounted = false;
        tracing::debug!(id = self.id(), cancelled, "stopwatch torn down");
    }

    fn command_cmd(&self, command: Command) -> Cmd {
        let id = self.id();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CommandMsg { id, command }) as Msg
        })
    }

    /// Command that starts this stopwatch through the message loop.
    pub fn start_cmd(&self) -> Cmd {
        self.command_cmd(Command::Start)
    }

    /// Command that stops this stopwatch through the message loop.
    pub fn stop_cmd(&self) -> Cmd {
        self.command_cmd(Command::Stop)
    }

    /// Command that resets this stopwatch through the message loop.
    pub fn reset_cmd(&self) -> Cmd {
        self.command_cmd(Command::Reset)
    }

    /// Command that toggles this stopwatch through the message loop.
    pub fn toggle_cmd(&self) -> Cmd {
        self.command_cmd(Command::Toggle)
    }

    fn on_tick(&mut self, tick: &TickMsg) -> Option<Cmd> {
        if !self.timekeeper.accept(tick) {
            return None;
        }
        self.presentation.render(&format(self.timekeeper.elapsed()));
        tracing::trace!(id = self.id(), elapsed = self.elapsed(), "stopwatch tick");
        self.timekeeper.handle().map(|h| h.schedule())
    }

    /// Handles ticks, command messages and, while focused, key presses.
    ///
    /// - [`TickMsg`] advances the counter when it belongs to the live
    ///   schedule, and returns the command for the next tick.
    /// - [`CommandMsg`] runs its command when addressed to this instance or
    ///   to id 0.
    /// - `KeyMsg` runs the command bound to the key, only while focused.
    ///
    /// Anything else, and everything after [`Model::teardown`], is ignored.
    ///
    /// # Returns
    ///
    /// The command the runtime should run next: the first tick after a
    /// start, the following tick after an accepted tick, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_rs::KeyMsg;
    /// use bubbletea_stopwatch::prelude::*;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut sw = stopwatch_new();
    /// sw.focus();
    ///
    /// let press = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::NONE };
    /// assert!(sw.update(Box::new(press)).is_some());
    /// assert_eq!(sw.state(), TimerState::Running);
    ///
    /// let tick = sw.tick_msg().unwrap();
    /// assert!(sw.update(Box::new(tick)).is_some());
    /// assert_eq!(sw.display(), "00:00:01");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.mounted {
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            return self.on_tick(tick);
        }

        if let Some(command_msg) = msg.downcast_ref::<CommandMsg>() {
            if command_msg.id != 0 && command_msg.id != self.id() {
                return None;
            }
            return self.dispatch(command_msg.command);
        }

        if self.focus {
            if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
                if let Some(command) = self.key_map.command_for(key_msg) {
                    return self.dispatch(command);
                }
            }
        }

        None
    }

    /// Renders the widget.
    pub fn view(&self) -> String {
        self.presentation.view(&self.key_map)
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        model.focus = true;
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Creates an idle stopwatch with defaults.
pub fn new() -> Model {
    Model::new()
}

/// Creates a stopwatch from options.
///
/// Fails when a label is empty or two commands share a key.
pub fn try_new(opts: Vec<StopwatchOption>) -> Result<Model> {
    Model::new_with_options(opts)
}
