//! A trailing-edge debouncer that only trusts a line level once it has stopped changing.

use crate::{
    polarity::RawSample,
    timer::{Deadline, Duration, Instant},
};

/// A raw level that made it through the debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accepted {
    pub value: RawSample,
    pub at: Instant,
}

/// `Debounce` is an allocation-free "lazy" debouncer: it reports a level change only after the
/// line has been quiet for the whole window.
///
/// # Algorithm
/// Every change of the raw level (re)schedules the latest level as a candidate, due one window
/// from now. Contact bounce keeps pushing the deadline out, so a burst of flips collapses into a
/// single candidate that fires once, one window after the last flip. If the burst settles back on
/// the level that was already accepted, the candidate is dropped without a report.
///
/// Samples that repeat the accepted level while nothing is pending are passed straight through as
/// steady re-samples, which is what lets the classifier track how long a press has lasted.
///
/// # Time
/// Nothing here blocks or sleeps. The caller is expected to call [`Debounce::poll`] no later than
/// [`Debounce::next_deadline`], or simply on every loop iteration.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    accepted: Option<RawSample>,
    last_raw: Option<RawSample>,
    candidate: Deadline<RawSample>,
}

impl Debounce {
    pub fn with_window(window: Duration) -> Self {
        Self { window, accepted: None, last_raw: None, candidate: Deadline::default() }
    }

    /// The last level that survived the window, if any has yet.
    pub fn accepted(&self) -> Option<RawSample> {
        self.accepted
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.candidate.due_at()
    }

    /// Report a raw sample read at `now`.
    ///
    /// Returns a steady re-sample of the accepted level, or `None` while a change is still
    /// settling. Accepted changes only ever come out of [`Debounce::poll`].
    pub fn report(&mut self, raw: RawSample, now: Instant) -> Option<Accepted> {
        let changed = self.last_raw != Some(raw);
        self.last_raw = Some(raw);

        if changed {
            let due = now + self.window;
            debug!("debounce: candidate {=u8} due at {}", raw, due);
            self.candidate.schedule(raw, due);
            return None;
        }

        if self.candidate.is_armed() {
            return None;
        }

        match self.accepted {
            Some(accepted) if accepted == raw => Some(Accepted { value: raw, at: now }),
            _ => None,
        }
    }

    /// Settle the pending candidate if its window has run out by `now`.
    ///
    /// The returned acceptance time is the deadline itself, not `now`, so late polling doesn't
    /// skew hold timing.
    pub fn poll(&mut self, now: Instant) -> Option<Accepted> {
        let (value, at) = self.candidate.expire(now)?;

        if self.accepted == Some(value) {
            debug!("debounce: bounced back to {=u8}, nothing to report", value);
            return None;
        }

        debug!("debounce: accepted {=u8} at {}", value, at);
        self.accepted = Some(value);
        Some(Accepted { value, at })
    }
}
