//! Debounced push-button gestures for polled digital inputs.
//!
//! Raw samples of a single contact go through polarity normalization, a trailing-edge debounce
//! filter and an edge/hold classifier. The resulting `down`, `up` and `hold` gestures are fanned
//! out to listeners under their public event names (`press`, `tap`, `release`, ...).

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod button;
pub mod classifier;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod event;
pub mod polarity;
pub mod timer;

pub use button::{Button, Gestures};
pub use classifier::State;
pub use config::{ButtonConfig, PinId, DEFAULT_DEBOUNCE_WINDOW, DEFAULT_HOLD_THRESHOLD};
pub use controller::{Controller, SampleFeed};
pub use error::{ConfigurationError, RegistryFull, UnknownEvent};
pub use event::{Event, Gesture, ListenerId};
pub use polarity::{ActiveLevel, RawSample};
pub use timer::{Duration, Instant};
