//! The ways a button can be attached to a sample source.

use embedded_hal::digital::InputPin;

use crate::{
    config::PinId,
    error::ConfigurationError,
    polarity::{ActiveLevel, RawSample, HIGH, LOW},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    /// Plain digital lines addressed by number.
    #[default]
    Default,
    /// A Firmata-style board where `A<n>` names the digital line `analog_pins[n]`.
    Firmata { analog_pins: &'static [u8] },
}

impl Controller {
    pub fn resolve_line(&self, pin: PinId) -> Result<u8, ConfigurationError> {
        match (self, pin) {
            (_, PinId::Digital(line)) => Ok(line),
            (Controller::Default, PinId::Analog(_)) => Err(ConfigurationError::InvalidPin),
            (Controller::Firmata { analog_pins }, PinId::Analog(n)) => analog_pins
                .get(usize::from(n))
                .copied()
                .ok_or(ConfigurationError::AnalogPinUnavailable(n)),
        }
    }

    /// Wrap an already configured input line as a sample feed. Pin mode and pull-up are the HAL's
    /// concern.
    pub fn initialize<P: InputPin>(&self, pin: P) -> SampleFeed<P> {
        SampleFeed { pin }
    }

    pub fn to_boolean(&self, level: ActiveLevel, raw: RawSample) -> bool {
        level.is_pressed(raw)
    }
}

/// Reads raw samples off an input line: high is `1`, low is `0`.
pub struct SampleFeed<P> {
    pin: P,
}

impl<P: InputPin> SampleFeed<P> {
    pub fn read(&mut self) -> Result<RawSample, P::Error> {
        Ok(if self.pin.is_high()? { HIGH } else { LOW })
    }
}
