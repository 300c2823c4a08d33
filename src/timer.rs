//! Monotonic time types and a single-shot deadline used in place of a deferred callback.

/// A monotonic timestamp with microsecond ticks, the same type the RP2040 timer counter returns.
pub type Instant = fugit::TimerInstantU64<1_000_000>;

/// A span of time with microsecond ticks.
pub type Duration = fugit::TimerDurationU64<1_000_000>;

/// One pending `fire(value)` scheduled for a point in time.
///
/// Scheduling again replaces whatever was pending, so only the most recent call ever fires. The
/// owner drives it by calling [`Deadline::expire`] from whatever timer facility the host has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline<T> {
    pending: Option<(T, Instant)>,
}

impl<T> Default for Deadline<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Copy> Deadline<T> {
    pub fn schedule(&mut self, value: T, at: Instant) {
        self.pending = Some((value, at));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value is due, if anything is pending.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at)
    }

    /// Disarm and hand back the pending value together with its deadline once `now` has reached
    /// it.
    pub fn expire(&mut self, now: Instant) -> Option<(T, Instant)> {
        match self.pending {
            Some((value, at)) if now >= at => {
                self.pending = None;
                Some((value, at))
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_ms(ms: u64) -> Instant {
        Instant::from_ticks(ms * 1_000)
    }

    #[test]
    fn fires_once_at_or_after_the_deadline() {
        let mut deadline = Deadline::default();
        deadline.schedule(1u8, at_ms(10));

        assert_eq!(deadline.expire(at_ms(9)), None);
        assert_eq!(deadline.expire(at_ms(10)), Some((1, at_ms(10))));
        assert_eq!(deadline.expire(at_ms(11)), None);
        assert!(!deadline.is_armed());
    }

    #[test]
    fn rescheduling_supersedes_the_pending_value() {
        let mut deadline = Deadline::default();
        deadline.schedule(1u8, at_ms(10));
        deadline.schedule(0u8, at_ms(12));

        assert_eq!(deadline.due_at(), Some(at_ms(12)));
        assert_eq!(deadline.expire(at_ms(10)), None);
        assert_eq!(deadline.expire(at_ms(12)), Some((0, at_ms(12))));
    }
}
