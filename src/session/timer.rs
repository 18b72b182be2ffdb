// SPDX-License-Identifier: PMPL-1.0-or-later

//! One-shot deadline owned by a session.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct BootTimer {
    due: Option<Instant>,
}

impl BootTimer {
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            due: Some(now + delay),
        }
    }

    pub fn disarmed() -> Self {
        Self { due: None }
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Time left until the deadline, zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    /// Disarm and report `true` if the deadline has passed.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm unconditionally; `true` if the timer was armed.
    pub fn take(&mut self) -> bool {
        self.due.take().is_some()
    }
}
