//! Change detection state for one watched file.

use std::time::{Duration, Instant, SystemTime};

/// Delay between noticing a modification and rechecking, giving the editor
/// time to finish writing the file.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// Where a watched file currently is in its recheck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    /// No change seen since the last check.
    #[default]
    Idle,
    /// A change was seen and the debounce window is running.
    Pending,
    /// A recheck is in progress.
    Checking,
}

/// Debounce state machine driven by modification-time observations.
///
/// A change only arms a window from [`WatchState::Idle`]; observations made
/// while a recheck is pending or running update the recorded modification
/// time but arm nothing, so a burst of writes coalesces into a single
/// recheck. The modification time guard filters watcher wakeups that did not
/// actually change the file.
#[derive(Debug, Default)]
pub struct DebounceMachine {
    state: WatchState,
    pending_since: Option<Instant>,
    last_mtime: Option<SystemTime>,
}

impl DebounceMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Record the modification time that the first check ran against, so
    /// the poll loop does not immediately re-trigger on it.
    pub fn seed(&mut self, mtime: SystemTime) {
        self.last_mtime = Some(mtime);
    }

    /// Feed one modification-time observation. Returns true when the
    /// observation arms a new debounce window.
    ///
    /// The modification time is recorded even while a recheck is pending or
    /// running: the settled check reads the latest content, so a coalesced
    /// write must not arm a second window once the machine returns to idle.
    pub fn observe(&mut self, mtime: SystemTime, now: Instant) -> bool {
        if self.last_mtime == Some(mtime) {
            return false;
        }
        self.last_mtime = Some(mtime);
        if self.state != WatchState::Idle {
            return false;
        }
        self.state = WatchState::Pending;
        self.pending_since = Some(now);
        true
    }

    /// True once the debounce window for a pending change has elapsed.
    #[must_use]
    pub fn ready(&self, now: Instant) -> bool {
        self.state == WatchState::Pending
            && self
                .pending_since
                .is_some_and(|since| now.duration_since(since) >= DEBOUNCE_WINDOW)
    }

    /// Mark the pending change as being checked.
    pub fn begin_check(&mut self) {
        self.state = WatchState::Checking;
        self.pending_since = None;
    }

    /// Return to idle so the next modification arms a new window.
    pub fn finish_check(&mut self) {
        self.state = WatchState::Idle;
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
