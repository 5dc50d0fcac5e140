//! Elapsed-seconds counter and the one-second tick schedule.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Period between two ticks. Each accepted tick adds one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// Internal ID management for stopwatch instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered by the runtime when a scheduled tick fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMsg {
    /// Instance the tick was scheduled by.
    pub id: i64,
    tag: i64,
}

/// Handle to the live tick schedule of one stopwatch.
///
/// Only ticks carrying the same `id` and `tag` advance the counter, so
/// dropping the handle cancels the schedule: the next in-flight tick is
/// rejected and no further tick is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    id: i64,
    tag: i64,
}

impl TickHandle {
    /// Instance id of the schedule.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Generation of the schedule. Bumped on every start.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// The message a firing of this schedule delivers.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Command that fires this schedule once after [`TICK_INTERVAL`].
    pub fn schedule(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }
}

/// Owns the elapsed time and at most one tick schedule.
#[derive(Debug)]
pub struct Timekeeper {
    id: i64,
    tag: i64,
    elapsed: u64,
    handle: Option<TickHandle>,
}

impl Default for Timekeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Timekeeper {
    /// Creates an idle timekeeper with a fresh instance id.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            tag: 0,
            elapsed: 0,
            handle: None,
        }
    }

    /// Unique id of this instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whole seconds since the last reset.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// The live schedule, if any.
    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// Whether a tick is scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    /// Creates a schedule unless one already exists.
    ///
    /// Returns the new handle so the caller can issue its first tick, or
    /// `None` when already scheduled. Starting twice never doubles the rate.
    pub fn start(&mut self) -> Option<TickHandle> {
        if self.handle.is_some() {
            return None;
        }
        self.tag += 1;
        let handle = TickHandle {
            id: self.id,
            tag: self.tag,
        };
        self.handle = Some(handle);
        Some(handle)
    }

    /// Cancels the schedule. Returns whether one was live.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    /// Cancels the schedule and zeroes the counter.
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed = 0;
    }

    /// Applies a tick if it belongs to the live schedule.
    pub fn accept(&mut self, tick: &TickMsg) -> bool {
        match self.handle {
            Some(handle) if handle.id == tick.id && handle.tag == tick.tag => {
                self.elapsed = self.elapsed.saturating_add(1);
                true
            }
            _ => false,
        }
    }
}

/// Formats whole seconds as `HH:MM:SS`.
///
/// Every field is at least two digits wide; hours are never truncated.
///
/// ```rust
/// use bubbletea_stopwatch::stopwatch::format;
///
/// assert_eq!(format(3661), "01:01:01");
/// assert_eq!(format(360000), "100:00:00");
/// ```
pub fn format(elapsed: u64) -> String {
    let hours = elapsed / 3600;
    let minutes = (elapsed % 3600) / 60;
    let seconds = elapsed % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parses text produced by [`format`] back into seconds.
///
/// Hours need at least two digits, minutes and seconds exactly two and both
/// must be below 60.
pub fn parse(text: &str) -> Option<u64> {
    let mut fields = text.split(':');
    let (h, m, s) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || h.len() < 2 || m.len() != 2 || s.len() != 2 {
        return None;
    }
    if ![h, m, s].iter().all(|f| f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let hours: u64 = h.parse().ok()?;
    let minutes: u64 = m.parse().ok()?;
    let seconds: u64 = s.parse().ok()?;
    if minutes > 59 || seconds > 59 {
        return None;
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)
}
