//! Turns accepted (post-debounce) levels into down, up and hold gestures.

use crate::{
    controller::Controller,
    event::Gesture,
    polarity::{ActiveLevel, RawSample},
    timer::{Duration, Instant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Released,
    Pressed,
}

/// Edge and hold state machine for a single contact.
///
/// Both `raw` and `previous` start out unknown, so the very first accepted level always counts as
/// an edge: a button that is released at start-up reports `up` once its first sample settles.
#[derive(Debug, Clone)]
pub struct Classifier {
    controller: Controller,
    level: ActiveLevel,
    hold_threshold: Duration,
    raw: Option<RawSample>,
    previous: Option<RawSample>,
    // Set on the press edge, cleared on release. Some iff the contact is pressed.
    pressed_since: Option<Instant>,
}

impl Classifier {
    pub fn new(controller: Controller, level: ActiveLevel, hold_threshold: Duration) -> Self {
        Self { controller, level, hold_threshold, raw: None, previous: None, pressed_since: None }
    }

    pub fn pressed_since(&self) -> Option<Instant> {
        self.pressed_since
    }

    pub fn state(&self) -> State {
        match self.pressed_since {
            Some(_) => State::Pressed,
            None => State::Released,
        }
    }

    /// Whether the latest accepted level is the pressed level. `false` before anything was
    /// accepted.
    pub fn is_pressed(&self) -> bool {
        self.raw.is_some_and(|raw| self.controller.to_boolean(self.level, raw))
    }

    /// Classify one accepted level observed at `now`.
    ///
    /// A change to the released level is an `up`, a change to the pressed level is a `down`. The
    /// same pressed level seen again is a steady re-sample and yields `hold` for as long as the
    /// press has outlasted the threshold, so holds repeat at the sampling cadence.
    pub fn accept(&mut self, raw: RawSample, now: Instant) -> Option<Gesture> {
        self.previous = self.raw;
        self.raw = Some(raw);

        let is_down = self.controller.to_boolean(self.level, raw);
        let is_edge = self.previous != Some(raw);

        let gesture = match (is_edge, is_down) {
            (true, false) => {
                self.pressed_since = None;
                Some(Gesture::Up)
            },
            (true, true) => {
                self.pressed_since.get_or_insert(now);
                Some(Gesture::Down)
            },
            (false, true) => match self.pressed_since {
                Some(since) if now > since + self.hold_threshold => Some(Gesture::Hold),
                _ => None,
            },
            (false, false) => None,
        };

        if let Some(gesture) = gesture {
            debug!("classifier: {} at {}", gesture, now);
        }

        gesture
    }
}
