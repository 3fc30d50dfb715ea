//! Input modality resolution
//!
//! Picks the one event family (touch, pointer or mouse) a binding listens to
//! and produces the namespaced start/move/end event keys for it.

use std::fmt;

use serde::{Deserialize, Serialize};

const TOUCH_START: &[&str] = &["touchstart"];
const TOUCH_MOVE: &[&str] = &["touchmove"];
const TOUCH_END: &[&str] = &["touchend", "touchleave", "touchcancel"];

const POINTER_START: &[&str] = &["pointerdown", "MSPointerDown"];
const POINTER_MOVE: &[&str] = &["pointermove", "MSPointerMove"];
const POINTER_END: &[&str] = &[
    "pointerup",
    "pointerout",
    "pointercancel",
    "pointerleave",
    "MSPointerUp",
    "MSPointerOut",
    "MSPointerCancel",
    "MSPointerLeave",
];

const MOUSE_START: &[&str] = &["mousedown"];
const MOUSE_MOVE: &[&str] = &["mousemove"];
const MOUSE_END: &[&str] = &["mouseup", "mouseleave"];

/// Platform input capabilities, probed once per process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub touch_events: bool,
    #[serde(default)]
    pub pointer_events: bool,
}

/// Family of platform input events a gesture is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputModality {
    Touch,
    Pointer,
    Mouse,
}

impl InputModality {
    /// Touch wins over pointer, pointer over mouse
    pub fn select(capabilities: Capabilities) -> Self {
        if capabilities.touch_events {
            InputModality::Touch
        } else if capabilities.pointer_events {
            InputModality::Pointer
        } else {
            InputModality::Mouse
        }
    }

    fn names(&self, phase: Phase) -> &'static [&'static str] {
        match (self, phase) {
            (InputModality::Touch, Phase::Start) => TOUCH_START,
            (InputModality::Touch, Phase::Move) => TOUCH_MOVE,
            (InputModality::Touch, Phase::End) => TOUCH_END,
            (InputModality::Pointer, Phase::Start) => POINTER_START,
            (InputModality::Pointer, Phase::Move) => POINTER_MOVE,
            (InputModality::Pointer, Phase::End) => POINTER_END,
            (InputModality::Mouse, Phase::Start) => MOUSE_START,
            (InputModality::Mouse, Phase::Move) => MOUSE_MOVE,
            (InputModality::Mouse, Phase::End) => MOUSE_END,
        }
    }
}

/// Gesture phase an event key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    Move,
    End,
}

/// Listener scope; the empty namespace is unscoped
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Namespace {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A platform event name scoped by a namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub base: &'static str,
    pub namespace: Namespace,
}

impl EventKey {
    pub fn new(base: &'static str, namespace: Namespace) -> Self {
        Self { base, namespace }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(self.base)
        } else {
            write!(f, "{}.{}", self.base, self.namespace.as_str())
        }
    }
}

/// Namespaced event keys for each gesture phase of one modality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTriad {
    pub modality: InputModality,
    pub start: Vec<EventKey>,
    pub moves: Vec<EventKey>,
    pub end: Vec<EventKey>,
}

impl EventTriad {
    pub fn keys(&self, phase: Phase) -> &[EventKey] {
        match phase {
            Phase::Start => &self.start,
            Phase::Move => &self.moves,
            Phase::End => &self.end,
        }
    }

    /// Phase the key belongs to, if it is one of this triad's keys
    pub fn phase_of(&self, key: &EventKey) -> Option<Phase> {
        [Phase::Start, Phase::Move, Phase::End]
            .into_iter()
            .find(|phase| self.keys(*phase).contains(key))
    }
}

/// Resolve the event triad a binding subscribes to
pub fn resolve(capabilities: Capabilities, namespace: &Namespace) -> EventTriad {
    let modality = InputModality::select(capabilities);
    let keys = |phase| {
        modality
            .names(phase)
            .iter()
            .map(|base| EventKey::new(*base, namespace.clone()))
            .collect::<Vec<_>>()
    };

    EventTriad {
        modality,
        start: keys(Phase::Start),
        moves: keys(Phase::Move),
        end: keys(Phase::End),
    }
}

/// Canonical name for a raw platform event name, if it is one we listen to
pub fn event_name(name: &str) -> Option<&'static str> {
    [
        TOUCH_START, TOUCH_MOVE, TOUCH_END,
        POINTER_START, POINTER_MOVE, POINTER_END,
        MOUSE_START, MOUSE_MOVE, MOUSE_END,
    ]
    .into_iter()
    .flatten()
    .copied()
    .find(|known| *known == name)
}
