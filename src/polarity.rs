//! Raw line levels and which of them means "pressed".
//!
//! Some button circuits read 0 when released and 1 when pressed, others the inverse. A pull-up
//! wired to ground through the switch is the common inverted case, so pull-up mode defaults to
//! inverted unless told otherwise.

/// A raw sample as read off the line. Only `0` and `1` are meaningful.
pub type RawSample = u8;

pub const LOW: RawSample = 0;
pub const HIGH: RawSample = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveLevel {
    inverted: bool,
}

impl ActiveLevel {
    /// Pressed reads high.
    pub const HIGH: Self = Self { inverted: false };
    /// Pressed reads low.
    pub const LOW: Self = Self { inverted: true };

    /// An explicit `invert` always wins, even when it is `false`. Without one, a pull-up implies
    /// an inverted circuit.
    pub fn resolve(invert: Option<bool>, pull_up: bool) -> Self {
        Self { inverted: invert.unwrap_or(pull_up) }
    }

    /// The raw value that means pressed.
    pub fn down_value(self) -> RawSample {
        if self.inverted {
            LOW
        } else {
            HIGH
        }
    }

    /// The raw value that means released.
    pub fn up_value(self) -> RawSample {
        if self.inverted {
            HIGH
        } else {
            LOW
        }
    }

    pub fn is_pressed(self, raw: RawSample) -> bool {
        raw == self.down_value()
    }

    /// Map anything that isn't a valid line level onto the released level.
    pub fn normalize(self, raw: RawSample) -> RawSample {
        match raw {
            LOW | HIGH => raw,
            _ => {
                warn!("malformed raw sample {=u8}, treating as released", raw);
                self.up_value()
            },
        }
    }
}

impl Default for ActiveLevel {
    fn default() -> Self {
        Self::HIGH
    }
}
