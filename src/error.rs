use core::fmt;

/// Why a [`Button`](crate::Button) could not be built from its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// No pin identifier was given.
    MissingPin,
    /// The identifier could not be parsed, or the controller can't address that kind of pin.
    InvalidPin,
    /// `A<n>` is outside the controller's analog pin map.
    AnalogPinUnavailable(u8),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPin => f.write_str("no pin identifier configured"),
            Self::InvalidPin => f.write_str("pin identifier can't be resolved to an input line"),
            Self::AnalogPinUnavailable(n) => write!(f, "analog pin A{n} is not mapped"),
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// The listener table is at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegistryFull;

impl fmt::Display for RegistryFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("listener registry is full")
    }
}

impl core::error::Error for RegistryFull {}

/// A string that doesn't name any public event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownEvent;

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown event name")
    }
}

impl core::error::Error for UnknownEvent {}
