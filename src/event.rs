//! Canonical gestures, the public event names they fan out to, and the listener table.

use core::{fmt, str::FromStr};

use heapless::Vec;

use crate::error::{RegistryFull, UnknownEvent};

/// What the classifier decided happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Down,
    Up,
    Hold,
}

impl Gesture {
    /// Every public event delivered for this gesture, in delivery order.
    pub const fn aliases(self) -> &'static [Event] {
        match self {
            Gesture::Down => &[Event::Down, Event::Press, Event::Tap, Event::Impact, Event::Hit],
            Gesture::Up => &[Event::Up, Event::Release],
            Gesture::Hold => &[Event::Hold],
        }
    }
}

/// Public event names listeners can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Down,
    Press,
    Tap,
    Impact,
    Hit,
    Up,
    Release,
    Hold,
}

impl Event {
    pub const ALL: [Event; 8] = [
        Event::Down,
        Event::Press,
        Event::Tap,
        Event::Impact,
        Event::Hit,
        Event::Up,
        Event::Release,
        Event::Hold,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Event::Down => "down",
            Event::Press => "press",
            Event::Tap => "tap",
            Event::Impact => "impact",
            Event::Hit => "hit",
            Event::Up => "up",
            Event::Release => "release",
            Event::Hold => "hold",
        }
    }

    /// The gesture this event is an alias of.
    pub const fn gesture(self) -> Gesture {
        match self {
            Event::Down | Event::Press | Event::Tap | Event::Impact | Event::Hit => Gesture::Down,
            Event::Up | Event::Release => Gesture::Up,
            Event::Hold => Gesture::Hold,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Event {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL.into_iter().find(|event| event.name() == s).ok_or(UnknownEvent)
    }
}

/// Handle returned by [`Emitter::on`], used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListenerId(u16);

pub type Listener<'a> = &'a dyn Fn(Event);

struct Subscription<'a> {
    id: ListenerId,
    event: Event,
    listener: Listener<'a>,
}

/// A fixed-capacity table of listeners keyed by event, kept in registration order.
///
/// Delivery is synchronous and fire-and-forget: a listener that panics takes the caller down with
/// it.
pub struct Emitter<'a, const N: usize> {
    subscriptions: Vec<Subscription<'a>, N>,
    next_id: u16,
}

impl<const N: usize> Default for Emitter<'_, N> {
    fn default() -> Self {
        Self { subscriptions: Vec::new(), next_id: 0 }
    }
}

impl<'a, const N: usize> Emitter<'a, N> {
    /// Subscribe `listener` to `event`. Ids wrap around but are never handed out while still in
    /// use.
    pub fn on(&mut self, event: Event, listener: Listener<'a>) -> Result<ListenerId, RegistryFull> {
        if self.subscriptions.is_full() {
            return Err(RegistryFull);
        }

        let mut id = ListenerId(self.next_id);
        while self.subscriptions.iter().any(|subscription| subscription.id == id) {
            self.next_id = self.next_id.wrapping_add(1);
            id = ListenerId(self.next_id);
        }
        self.next_id = self.next_id.wrapping_add(1);

        self.subscriptions.push(Subscription { id, event, listener }).map_err(|_| RegistryFull)?;
        Ok(id)
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    pub fn listener_count(&self, event: Event) -> usize {
        self.subscriptions.iter().filter(|subscription| subscription.event == event).count()
    }

    /// Deliver every alias of `gesture`, each to its listeners in registration order.
    pub fn emit(&self, gesture: Gesture) {
        for &event in gesture.aliases() {
            for subscription in self.subscriptions.iter().filter(|s| s.event == event) {
                trace!("emit: {} to listener {}", event, subscription.id);
                (subscription.listener)(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn aliases_are_delivered_in_table_order() {
        let log = RefCell::new(std::vec::Vec::new());
        let record = |event: Event| log.borrow_mut().push(event);

        let mut emitter = Emitter::<16>::default();
        for event in Event::ALL {
            emitter.on(event, &record).unwrap();
        }

        emitter.emit(Gesture::Down);
        assert_eq!(
            *log.borrow(),
            [Event::Down, Event::Press, Event::Tap, Event::Impact, Event::Hit]
        );

        log.borrow_mut().clear();
        emitter.emit(Gesture::Up);
        assert_eq!(*log.borrow(), [Event::Up, Event::Release]);

        log.borrow_mut().clear();
        emitter.emit(Gesture::Hold);
        assert_eq!(*log.borrow(), [Event::Hold]);
    }

    #[test]
    fn listeners_of_one_event_run_in_registration_order() {
        let log = RefCell::new(std::vec::Vec::new());
        let first = |_: Event| log.borrow_mut().push("first");
        let second = |_: Event| log.borrow_mut().push("second");

        let mut emitter = Emitter::<4>::default();
        emitter.on(Event::Release, &first).unwrap();
        emitter.on(Event::Release, &second).unwrap();

        emitter.emit(Gesture::Up);
        assert_eq!(*log.borrow(), ["first", "second"]);
    }

    #[test]
    fn unrelated_listeners_stay_quiet() {
        let log = RefCell::new(std::vec::Vec::new());
        let record = |event: Event| log.borrow_mut().push(event);

        let mut emitter = Emitter::<4>::default();
        emitter.on(Event::Hold, &record).unwrap();

        emitter.emit(Gesture::Down);
        emitter.emit(Gesture::Up);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn off_removes_only_that_listener() {
        let log = RefCell::new(std::vec::Vec::new());
        let first = |_: Event| log.borrow_mut().push(1);
        let second = |_: Event| log.borrow_mut().push(2);

        let mut emitter = Emitter::<4>::default();
        let id = emitter.on(Event::Tap, &first).unwrap();
        emitter.on(Event::Tap, &second).unwrap();

        assert!(emitter.off(id));
        assert!(!emitter.off(id));
        assert_eq!(emitter.listener_count(Event::Tap), 1);

        emitter.emit(Gesture::Down);
        assert_eq!(*log.borrow(), [2]);
    }

    #[test]
    fn registry_reports_when_full() {
        let noop = |_: Event| {};
        let mut emitter = Emitter::<2>::default();

        emitter.on(Event::Up, &noop).unwrap();
        emitter.on(Event::Up, &noop).unwrap();
        assert_eq!(emitter.on(Event::Up, &noop), Err(RegistryFull));
    }

    #[test]
    fn ids_stay_unique_after_the_counter_wraps() {
        let holds = RefCell::new(std::vec::Vec::new());
        let first = |_: Event| holds.borrow_mut().push("first");
        let second = |_: Event| holds.borrow_mut().push("second");
        let noop = |_: Event| {};

        let mut emitter = Emitter::<4>::default();
        let first_id = emitter.on(Event::Hold, &first).unwrap();

        for _ in 0..u16::MAX {
            let id = emitter.on(Event::Tap, &noop).unwrap();
            assert!(emitter.off(id));
        }

        let second_id = emitter.on(Event::Hold, &second).unwrap();
        assert_ne!(first_id, second_id);

        assert!(emitter.off(second_id));
        emitter.emit(Gesture::Hold);
        assert_eq!(*holds.borrow(), ["first"]);
    }

    #[test]
    fn names_round_trip() {
        for event in Event::ALL {
            assert_eq!(event.name().parse::<Event>(), Ok(event));
            assert!(event.gesture().aliases().contains(&event));
        }
        assert_eq!("click".parse::<Event>(), Err(UnknownEvent));
    }
}
