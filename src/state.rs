//! Control State
//!
//! Idle/armed state machine behind a delete control.

use crate::timer::RevertScheduler;

/// Identifies one armed cycle so a stale timer cannot revert a newer one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevertToken(u64);

/// Outcome of a click on the control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// First click: the default action must be suppressed
    Armed,
    /// Click while armed: the default action proceeds (the actual delete)
    ConfirmThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Armed {
    token: RevertToken,
    min_width: Option<u32>,
}

/// Per-control state. Confirming exactly when a revert timer is armed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    armed: Option<Armed>,
    next_token: u64,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the control is waiting for the confirming click
    pub fn is_confirming(&self) -> bool {
        self.armed.is_some()
    }

    /// Width captured on the arming click
    pub fn min_width(&self) -> Option<u32> {
        self.armed.and_then(|a| a.min_width)
    }

    /// Token of the outstanding revert timer, if any
    pub fn pending_revert(&self) -> Option<RevertToken> {
        self.armed.map(|a| a.token)
    }

    /// Handle a click. `measured_width` is the control's width just before
    /// the click (None when width stability is off or nothing was measured).
    pub fn activate<S: RevertScheduler>(
        &mut self,
        measured_width: Option<u32>,
        revert_after_ms: u32,
        scheduler: &mut S,
    ) -> Activation {
        if self.armed.is_some() {
            return Activation::ConfirmThrough;
        }

        let token = RevertToken(self.next_token);
        self.next_token += 1;
        self.armed = Some(Armed {
            token,
            min_width: measured_width,
        });

        scheduler.cancel();
        scheduler.schedule(token, revert_after_ms);
        Activation::Armed
    }

    /// Timer fired. Returns false when `token` no longer matches the armed cycle.
    pub fn revert(&mut self, token: RevertToken) -> bool {
        match self.armed {
            Some(armed) if armed.token == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Unmount: drop any outstanding timer and return to idle
    pub fn teardown<S: RevertScheduler>(&mut self, scheduler: &mut S) {
        scheduler.cancel();
        self.armed = None;
    }
}
