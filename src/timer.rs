//! Revert Timers
//!
//! Schedules the automatic return to idle. The browser implementation wraps
//! a `gloo_timers` timeout; tests drive a virtual clock instead.

use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::state::RevertToken;

/// One-slot timer owned by a single control.
/// Scheduling replaces whatever was outstanding.
pub trait RevertScheduler {
    fn schedule(&mut self, token: RevertToken, delay_ms: u32);
    fn cancel(&mut self);
}

/// Browser timer: fires `on_fire` with the token after the delay
pub struct BrowserScheduler {
    on_fire: Rc<dyn Fn(RevertToken)>,
    pending: Option<Timeout>,
}

impl BrowserScheduler {
    pub fn new(on_fire: impl Fn(RevertToken) + 'static) -> Self {
        Self {
            on_fire: Rc::new(on_fire),
            pending: None,
        }
    }
}

impl RevertScheduler for BrowserScheduler {
    fn schedule(&mut self, token: RevertToken, delay_ms: u32) {
        let on_fire = Rc::clone(&self.on_fire);
        // Dropping a Timeout clears it
        self.pending = Some(Timeout::new(delay_ms, move || on_fire(token)));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Virtual clock for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    pending: Option<(RevertToken, u64)>,
    /// Number of `schedule` calls
    pub scheduled: usize,
    /// Number of live timers cancelled or replaced
    pub cancelled: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<RevertToken> {
        self.pending.map(|(token, _)| token)
    }

    /// Move time forward; returns the token of a timer that came due
    pub fn advance(&mut self, ms: u32) -> Option<RevertToken> {
        self.now_ms += u64::from(ms);
        match self.pending {
            Some((token, due)) if due <= self.now_ms => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl RevertScheduler for ManualScheduler {
    fn schedule(&mut self, token: RevertToken, delay_ms: u32) {
        if self.pending.is_some() {
            self.cancelled += 1;
        }
        self.pending = Some((token, self.now_ms + u64::from(delay_ms)));
        self.scheduled += 1;
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancelled += 1;
        }
    }
}
