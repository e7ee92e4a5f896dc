//! `TickTimer` — a single cancellable deadline with epoch-guarded delivery.
//!
//! # Why this exists
//!
//! The original demo pattern — an interval callback that checks a "still
//! running" flag — leaves a window where a callback scheduled before a pause
//! fires after it and mutates state the driver has already moved past.  The
//! fix is to make cancellation synchronous from the owner's perspective:
//! the driver owns the timer handle exclusively, and cancelling bumps an
//! epoch counter so every previously issued fire token becomes
//! unconditionally invalid, no matter when it is delivered.
//!
//! The timer holds at most one pending deadline: arming replaces any
//! previous one.  There is no thread here — the owner pumps [`poll`] from
//! its event loop and time is modeled as [`Tick`]s.
//!
//! [`poll`]: TickTimer::poll

use fl_core::Tick;

/// The driver's fixed firing period, in ticks.
pub const TICK_PERIOD: u64 = 2;

// ── TimerFire ─────────────────────────────────────────────────────────────────

/// Proof token that a deadline elapsed, stamped with the epoch that issued
/// it.  Deliver it back via [`LiveDemo::deliver`][crate::LiveDemo::deliver];
/// if the timer has been cancelled or re-armed since, delivery is a no-op.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TimerFire {
    pub(crate) epoch: u64,
}

// ── TickTimer ─────────────────────────────────────────────────────────────────

/// A one-shot, re-armable deadline owned by a single driver.
#[derive(Clone, Debug)]
pub struct TickTimer {
    period: u64,
    /// Bumped on every arm and cancel; fire tokens from older epochs are
    /// rejected by [`accepts`][Self::accepts].
    epoch: u64,
    deadline: Option<Tick>,
}

impl TickTimer {
    /// A disarmed timer with the given period.
    ///
    /// Callers validate `period > 0` before construction (see
    /// [`LiveDemo::with_period`][crate::LiveDemo::with_period]); a zero
    /// period would fire on every poll.
    pub fn new(period: u64) -> Self {
        Self { period, epoch: 0, deadline: None }
    }

    #[inline]
    pub fn period(&self) -> u64 {
        self.period
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm (or re-arm) the timer to fire `period` ticks after `now`.
    ///
    /// Replaces any pending deadline and starts a new epoch, so fire tokens
    /// from before this call are dead.
    pub fn arm(&mut self, now: Tick) {
        self.epoch += 1;
        self.deadline = Some(now + self.period);
    }

    /// Cancel the pending deadline, if any.
    ///
    /// Synchronous and total: after this returns, no previously issued
    /// [`TimerFire`] will be accepted and [`poll`][Self::poll] returns
    /// `None` until the next arm.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.deadline = None;
    }

    /// If the deadline has elapsed at `now`, consume it and return a fire
    /// token for the current epoch.
    pub fn poll(&mut self, now: Tick) -> Option<TimerFire> {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                Some(TimerFire { epoch: self.epoch })
            }
            _ => None,
        }
    }

    /// `true` if `fire` was issued by the current epoch — i.e. no arm or
    /// cancel has happened since the token was produced.
    #[inline]
    pub fn accepts(&self, fire: TimerFire) -> bool {
        fire.epoch == self.epoch
    }
}
