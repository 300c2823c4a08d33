use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::{
    classifier::{Classifier, State},
    config::ButtonConfig,
    controller::SampleFeed,
    debounce::{Accepted, Debounce},
    error::{ConfigurationError, RegistryFull},
    event::{Emitter, Event, Gesture, Listener, ListenerId},
    polarity::{ActiveLevel, RawSample},
    timer::Instant,
};

/// Gestures produced by one call into the button. A call can settle an overdue candidate and
/// classify the new sample, so there are at most two.
pub type Gestures = Vec<Gesture, 2>;

/// A debounced push button that classifies presses, releases and holds.
///
/// The button owns no timer or thread. The host feeds it raw samples through
/// [`Button::on_sample`] (or [`Button::sample`] straight from a pin), and calls [`Button::poll`]
/// whenever [`Button::next_deadline`] comes due so that a settled level is accepted even if no
/// further samples arrive. Every gesture is delivered to the registered listeners before the call
/// returns.
pub struct Button<'a, const LISTENERS: usize = 16> {
    line: u8,
    level: ActiveLevel,
    debounce: Debounce,
    classifier: Classifier,
    emitter: Emitter<'a, LISTENERS>,
}

impl<'a, const LISTENERS: usize> Button<'a, LISTENERS> {
    pub fn new(config: ButtonConfig) -> Result<Self, ConfigurationError> {
        let line = config.line()?;
        let level = config.active_level();

        info!(
            "button on line {=u8}: pressed reads {=u8}, hold after {}",
            line,
            level.down_value(),
            config.hold_threshold
        );

        Ok(Self {
            line,
            level,
            debounce: Debounce::with_window(config.debounce_window),
            classifier: Classifier::new(config.controller, level, config.hold_threshold),
            emitter: Emitter::default(),
        })
    }

    /// The resolved input line number.
    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.level
    }

    pub fn on(&mut self, event: Event, listener: Listener<'a>) -> Result<ListenerId, RegistryFull> {
        self.emitter.on(event, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    pub fn listener_count(&self, event: Event) -> usize {
        self.emitter.listener_count(event)
    }

    /// Feed one raw sample read at `now`.
    pub fn on_sample(&mut self, raw: RawSample, now: Instant) -> Gestures {
        let raw = self.level.normalize(raw);
        let mut gestures = Gestures::new();

        // The window may have run out before this sample showed up.
        if let Some(accepted) = self.debounce.poll(now) {
            self.classify(accepted, &mut gestures);
        }

        if let Some(accepted) = self.debounce.report(raw, now) {
            self.classify(accepted, &mut gestures);
        }

        gestures
    }

    /// Read one sample from `feed` and run it through [`Button::on_sample`].
    pub fn sample<P: InputPin>(
        &mut self,
        feed: &mut SampleFeed<P>,
        now: Instant,
    ) -> Result<Gestures, P::Error> {
        let raw = feed.read()?;
        Ok(self.on_sample(raw, now))
    }

    /// Timer callback: accept a pending level whose debounce window has run out.
    pub fn poll(&mut self, now: Instant) -> Gestures {
        let mut gestures = Gestures::new();

        if let Some(accepted) = self.debounce.poll(now) {
            self.classify(accepted, &mut gestures);
        }

        gestures
    }

    /// When [`Button::poll`] should run next, if a level change is settling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }

    /// `1` while pressed, `0` otherwise.
    pub fn value(&self) -> u8 {
        u8::from(self.is_pressed())
    }

    /// Whether the latest accepted level means pressed. This lags the raw line by the debounce
    /// window.
    pub fn is_pressed(&self) -> bool {
        self.classifier.is_pressed()
    }

    pub fn state(&self) -> State {
        self.classifier.state()
    }

    /// When the current press was accepted, while pressed.
    pub fn pressed_since(&self) -> Option<Instant> {
        self.classifier.pressed_since()
    }

    fn classify(&mut self, accepted: Accepted, gestures: &mut Gestures) {
        if let Some(gesture) = self.classifier.accept(accepted.value, accepted.at) {
            self.emitter.emit(gesture);
            // One gesture per debounce step, two steps per call at most.
            gestures.push(gesture).ok();
        }
    }
}
