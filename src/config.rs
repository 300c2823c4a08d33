use core::str::FromStr;

use crate::{
    controller::Controller,
    error::ConfigurationError,
    polarity::ActiveLevel,
    timer::Duration,
};

/// Minimum continuous press before `hold` fires.
pub const DEFAULT_HOLD_THRESHOLD: Duration = Duration::millis(500);

/// Quiet time a level change needs before it is trusted.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::millis(7);

/// Identifies the input line a button is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinId {
    /// A digital line number, written `"13"`.
    Digital(u8),
    /// An analog input used as a digital line, written `"A0"`.
    Analog(u8),
}

impl FromStr for PinId {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |digits: &str| digits.parse::<u8>().map_err(|_| ConfigurationError::InvalidPin);

        match s.strip_prefix('A') {
            Some(digits) => parse(digits).map(PinId::Analog),
            None => parse(s).map(PinId::Digital),
        }
    }
}

impl From<u8> for PinId {
    fn from(line: u8) -> Self {
        PinId::Digital(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub pin: Option<PinId>,
    /// The line has its internal pull-up enabled. Without an explicit `invert`, this makes a low
    /// level mean pressed.
    pub pull_up: bool,
    pub invert: Option<bool>,
    pub hold_threshold: Duration,
    pub debounce_window: Duration,
    pub controller: Controller,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            pin: None,
            pull_up: false,
            invert: None,
            hold_threshold: DEFAULT_HOLD_THRESHOLD,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            controller: Controller::Default,
        }
    }
}

impl ButtonConfig {
    pub fn new(pin: PinId) -> Self {
        Self { pin: Some(pin), ..Self::default() }
    }

    pub fn with_pull_up(self) -> Self {
        Self { pull_up: true, ..self }
    }

    pub fn with_invert(self, invert: bool) -> Self {
        Self { invert: Some(invert), ..self }
    }

    pub fn with_hold_threshold(self, hold_threshold: Duration) -> Self {
        Self { hold_threshold, ..self }
    }

    pub fn with_debounce_window(self, debounce_window: Duration) -> Self {
        Self { debounce_window, ..self }
    }

    pub fn with_controller(self, controller: Controller) -> Self {
        Self { controller, ..self }
    }

    pub fn active_level(&self) -> ActiveLevel {
        ActiveLevel::resolve(self.invert, self.pull_up)
    }

    /// The input line number this configuration resolves to.
    pub fn line(&self) -> Result<u8, ConfigurationError> {
        let pin = self.pin.ok_or(ConfigurationError::MissingPin)?;
        self.controller.resolve_line(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pin_identifiers() {
        assert_eq!("13".parse::<PinId>(), Ok(PinId::Digital(13)));
        assert_eq!(" 7 ".parse::<PinId>(), Ok(PinId::Digital(7)));
        assert_eq!("A3".parse::<PinId>(), Ok(PinId::Analog(3)));
        assert_eq!("".parse::<PinId>(), Err(ConfigurationError::InvalidPin));
        assert_eq!("A".parse::<PinId>(), Err(ConfigurationError::InvalidPin));
        assert_eq!("D4".parse::<PinId>(), Err(ConfigurationError::InvalidPin));
        assert_eq!("300".parse::<PinId>(), Err(ConfigurationError::InvalidPin));
    }

    #[test]
    fn defaults() {
        let config = ButtonConfig::new(PinId::Digital(2));

        assert_eq!(config.pin, Some(PinId::Digital(2)));
        assert_eq!(config.hold_threshold, Duration::millis(500));
        assert_eq!(config.debounce_window, Duration::millis(7));
        assert_eq!(config.active_level(), ActiveLevel::HIGH);
        assert_eq!(config.line(), Ok(2));
    }

    #[test]
    fn pull_up_inverts_unless_told_otherwise() {
        let config = ButtonConfig::new(PinId::Digital(2));

        assert_eq!(config.with_pull_up().active_level(), ActiveLevel::LOW);
        assert_eq!(config.with_pull_up().with_invert(false).active_level(), ActiveLevel::HIGH);
        assert_eq!(config.with_invert(true).active_level(), ActiveLevel::LOW);
    }

    #[test]
    fn missing_pin_is_a_configuration_error() {
        assert_eq!(ButtonConfig::default().line(), Err(ConfigurationError::MissingPin));
    }
}
