//! In-memory gesture host
//!
//! Keeps the listener table, the emitted swipe events and the touch-action
//! directives in memory. Used by the replay tool and by tests; embedders can
//! use it to exercise their own gesture receivers without a platform.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::modality::EventKey;
use super::raw::InputEvent;
use super::swipe::{Emission, GestureHost, InputDisposition, SwipeEvent, SwipeRecognizer};
use crate::config::TouchAction;

#[derive(Debug)]
pub struct RecordingHost<E> {
    /// Subscribed listeners in subscription order; duplicates are kept
    listeners: Vec<(E, EventKey)>,
    touch_actions: HashMap<E, TouchAction>,
    /// Swipe event names whose emission receivers veto
    suppressed: HashSet<&'static str>,
    pub emitted: Vec<(E, SwipeEvent)>,
}

impl<E: Copy + Eq + Hash + Debug> Default for RecordingHost<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash + Debug> RecordingHost<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            touch_actions: HashMap::new(),
            suppressed: HashSet::new(),
            emitted: Vec::new(),
        }
    }

    /// Veto every future emission of `name` (`swipestart`, `swipemove`, ...)
    pub fn suppress(&mut self, name: &'static str) {
        self.suppressed.insert(name);
    }

    pub fn allow(&mut self, name: &str) {
        self.suppressed.remove(name);
    }

    /// Number of listeners for a raw event name on `element`
    pub fn listener_count(&self, element: E, name: &str) -> usize {
        self.listeners
            .iter()
            .filter(|(el, key)| *el == element && key.base == name)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn touch_action(&self, element: E) -> Option<TouchAction> {
        self.touch_actions.get(&element).copied()
    }

    /// Deliver a raw platform event to every listener subscribed for it
    ///
    /// Listeners are snapshotted before delivery, as platforms do.
    pub fn dispatch(
        &mut self,
        recognizer: &mut SwipeRecognizer<E>,
        element: E,
        name: &str,
        event: &InputEvent,
    ) -> InputDisposition {
        let keys: Vec<EventKey> = self
            .listeners
            .iter()
            .filter(|(el, key)| *el == element && key.base == name)
            .map(|(_, key)| key.clone())
            .collect();

        keys.iter().fold(InputDisposition::default(), |disposition, key| {
            disposition.merge(recognizer.handle(element, key, event, self))
        })
    }

    pub fn take_events(&mut self) -> Vec<(E, SwipeEvent)> {
        std::mem::take(&mut self.emitted)
    }
}

impl<E: Copy + Eq + Hash + Debug> GestureHost for RecordingHost<E> {
    type Element = E;

    fn subscribe(&mut self, element: E, key: &EventKey) {
        trace!(?element, %key, "subscribe");
        self.listeners.push((element, key.clone()));
    }

    fn unsubscribe(&mut self, element: E, key: &EventKey) {
        trace!(?element, %key, "unsubscribe");
        self.listeners.retain(|(el, k)| !(*el == element && k == key));
    }

    fn emit(&mut self, element: E, event: &SwipeEvent) -> Emission {
        self.emitted.push((element, event.clone()));
        if self.suppressed.contains(event.name()) {
            Emission::SUPPRESSED
        } else {
            Emission::DELIVERED
        }
    }

    fn set_touch_action(&mut self, element: E, action: Option<TouchAction>) {
        match action {
            Some(action) => {
                self.touch_actions.insert(element, action);
            }
            None => {
                self.touch_actions.remove(&element);
            }
        }
    }
}
