/// Exactly-once completion detection for one tree-walk job.
///
/// Two independent counters: the discovered total (unknown until the
/// discovery phase finishes, then set exactly once) and the number of
/// completed checks. The "job complete" transition fires iff the total is
/// known and `completed >= total`; both event kinds run the check because
/// either can be the last to arrive. Once fired, further arrivals are no-ops.
#[derive(Debug, Default)]
pub struct CompletionBarrier {
    total: Option<usize>,
    completed: usize,
    fired: bool,
}

impl CompletionBarrier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the final discovered total. A second call is ignored (the
    /// total transitions from unknown to known exactly once).
    ///
    /// Returns true iff this call fired the completion transition.
    pub fn set_total(&mut self, total: usize) -> bool {
        if self.total.is_none() {
            self.total = Some(total);
        }
        self.try_fire()
    }

    /// Record one completed check, success or failure alike.
    ///
    /// Returns true iff this call fired the completion transition.
    pub fn complete_one(&mut self) -> bool {
        self.completed += 1;
        self.try_fire()
    }

    fn try_fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        match self.total {
            Some(total) if self.completed >= total => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.fired
    }

    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub const fn total(&self) -> Option<usize> {
        self.total
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
