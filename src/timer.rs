//! Deadline slots driven by caller-supplied timestamps.
//!
//! Nothing here reads a clock. The browser loop passes `performance.now()`
//! into `fire`, tests pass plain numbers, and a slot that is re-armed simply
//! forgets its previous deadline.

/// A single pending deadline (or none).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer {
    due_ms: Option<f64>,
}

impl Timer {
    pub fn new() -> Self {
        Self { due_ms: None }
    }

    /// Schedule `delay_ms` from `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: f64, delay_ms: f64) {
        self.due_ms = Some(now + delay_ms.max(0.0));
    }

    /// Schedule only if nothing is pending. Returns whether the slot was armed.
    pub fn arm_once(&mut self, now: f64, delay_ms: f64) -> bool {
        if self.due_ms.is_some() {
            return false;
        }
        self.arm(now, delay_ms);
        true
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.due_ms
    }

    /// True exactly once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due_ms {
            Some(due) if now >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
