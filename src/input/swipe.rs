//! Swipe gesture recognition
//!
//! Each (element, namespace) binding listens to the start events of the
//! resolved input modality. A qualifying start opens a session and adds the
//! move/end listeners; the end event (or a suppressed start) removes them
//! again, so at most one session is live per binding.
//!
//! Supports:
//! - Touch, pointer and mouse input, one family per binding
//! - Single contact only (multi-touch and pinches are ignored)
//! - Axis locking on touch/mouse input (pan-x / pan-y emulation)
//! - Receiver veto of the start and move phases

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, trace};

use super::modality::{resolve, Capabilities, EventKey, EventTriad, InputModality, Namespace, Phase};
use super::raw::{InputEvent, MouseButton, Point};
use crate::config::{SwipeConfig, TouchAction};

/// Movement a gesture must exceed in either axis to count as a swipe
pub const SWIPE_THRESHOLD: f64 = 1.0;

/// Direction of a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Direction of the dominant axis, or `None` below the swipe threshold
    pub fn from_delta(delta: Point) -> Option<Self> {
        if delta.x.abs() <= SWIPE_THRESHOLD && delta.y.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        let direction = if delta.x.abs() > delta.y.abs() {
            if delta.x < 0.0 { SwipeDirection::Left } else { SwipeDirection::Right }
        } else if delta.y < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };
        Some(direction)
    }
}

/// Where and when a session started
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwipeStart {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

/// Recognized gesture phase, delivered through `GestureHost::emit`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwipeEvent {
    Start {
        start: SwipeStart,
    },
    Move {
        delta: Point,
    },
    End {
        delta: Point,
        direction: SwipeDirection,
        duration_ms: u64,
    },
}

impl SwipeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SwipeEvent::Start { .. } => "swipestart",
            SwipeEvent::Move { .. } => "swipemove",
            SwipeEvent::End { .. } => "swipeend",
        }
    }
}

/// Outcome of delivering a `SwipeEvent` to its receivers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emission {
    /// A receiver vetoed the phase
    pub suppressed: bool,
}

impl Emission {
    pub const DELIVERED: Emission = Emission { suppressed: false };
    pub const SUPPRESSED: Emission = Emission { suppressed: true };
}

/// What the host should do with the raw event after the recognizer saw it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputDisposition {
    /// Suppress the platform's default handling (scroll, zoom, image drag)
    pub prevent_default: bool,
    /// Native scrolling owns this event; stop it reaching outer handlers
    pub stop_propagation: bool,
}

impl InputDisposition {
    pub fn merge(self, other: InputDisposition) -> Self {
        Self {
            prevent_default: self.prevent_default || other.prevent_default,
            stop_propagation: self.stop_propagation || other.stop_propagation,
        }
    }
}

/// UI-side event facility the recognizer drives
pub trait GestureHost {
    type Element: Copy + Eq + Hash + Debug;

    /// Start routing `key` events on `element` to `SwipeRecognizer::handle`
    fn subscribe(&mut self, element: Self::Element, key: &EventKey);

    fn unsubscribe(&mut self, element: Self::Element, key: &EventKey);

    fn emit(&mut self, element: Self::Element, event: &SwipeEvent) -> Emission;

    /// Set (or clear, with `None`) the element's touch-action directive
    fn set_touch_action(&mut self, element: Self::Element, action: Option<TouchAction>);
}

/// Axis-lock decision, taken on the first move of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLock {
    /// No move seen yet
    Undecided,
    /// Native scrolling wins for the rest of the session
    Scrolling,
    /// The gesture is claimed as a swipe
    Swiping,
}

impl AxisLock {
    fn decide(touch_action: TouchAction, delta: Point) -> Self {
        let (dx, dy) = (delta.x.abs(), delta.y.abs());
        let swiping = match touch_action {
            TouchAction::None => return AxisLock::Swiping,
            // Ties, including no movement at all, go to native scrolling
            TouchAction::PanX => dy < dx,
            TouchAction::PanY => dx < dy,
        };

        if swiping { AxisLock::Swiping } else { AxisLock::Scrolling }
    }
}

/// State of one gesture attempt, from qualifying start to end
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub start: SwipeStart,
    /// Last committed movement relative to `start`
    pub delta: Point,
    pub axis_lock: AxisLock,
}

impl GestureSession {
    fn new(start: SwipeStart) -> Self {
        Self {
            start,
            delta: Point::ZERO,
            axis_lock: AxisLock::Undecided,
        }
    }
}

/// Position of the tracked contact, if the event qualifies for a swipe
fn tracked_position(modality: InputModality, event: &InputEvent) -> Option<Point> {
    if modality == InputModality::Mouse && event.button != Some(MouseButton::Primary) {
        return None;
    }
    if event.contacts.len() > 1 || event.is_pinch() {
        return None;
    }
    event.position()
}

#[derive(Debug)]
struct Binding {
    config: SwipeConfig,
    triad: EventTriad,
    /// Move and end listeners are subscribed exactly while this is `Some`
    session: Option<GestureSession>,
}

impl Binding {
    fn subscribe_tracking<H: GestureHost>(&self, element: H::Element, host: &mut H) {
        for key in self.triad.moves.iter().chain(&self.triad.end) {
            host.subscribe(element, key);
        }
    }

    fn unsubscribe_tracking<H: GestureHost>(&self, element: H::Element, host: &mut H) {
        for key in self.triad.moves.iter().chain(&self.triad.end) {
            host.unsubscribe(element, key);
        }
    }

    fn release<H: GestureHost>(&self, element: H::Element, host: &mut H) {
        for key in &self.triad.start {
            host.unsubscribe(element, key);
        }
        if self.session.is_some() {
            self.unsubscribe_tracking(element, host);
        }
    }

    fn on_start<H: GestureHost>(
        &mut self,
        element: H::Element,
        event: &InputEvent,
        host: &mut H,
    ) -> InputDisposition {
        let modality = self.triad.modality;
        let Some(position) = tracked_position(modality, event) else {
            trace!(?element, contacts = event.contacts.len(), "Ignoring swipe start");
            return InputDisposition::default();
        };

        let disposition = InputDisposition {
            prevent_default: modality != InputModality::Touch && event.on_image,
            stop_propagation: false,
        };

        let start = SwipeStart {
            x: position.x,
            y: position.y,
            timestamp_ms: event.timestamp_ms,
        };
        let tracking = self.session.is_some();

        if host.emit(element, &SwipeEvent::Start { start }).suppressed {
            debug!(?element, "Swipe start suppressed by receiver");
            if tracking {
                self.session = None;
                self.unsubscribe_tracking(element, host);
            }
            return disposition;
        }

        self.session = Some(GestureSession::new(start));
        if !tracking {
            self.subscribe_tracking(element, host);
        }
        debug!(?element, x = start.x, y = start.y, "Swipe session started");
        disposition
    }

    fn on_move<H: GestureHost>(
        &mut self,
        element: H::Element,
        event: &InputEvent,
        host: &mut H,
    ) -> InputDisposition {
        let modality = self.triad.modality;
        let touch_action = self.config.touch_action;
        let Some(session) = self.session.as_mut() else {
            return InputDisposition::default();
        };
        let Some(position) = tracked_position(modality, event) else {
            trace!(?element, "Ignoring swipe move");
            return InputDisposition::default();
        };

        let delta = Point::new(position.x - session.start.x, position.y - session.start.y);
        let mut disposition = InputDisposition::default();

        // Pointer input relies on the touch-action directive instead
        if modality != InputModality::Pointer {
            if session.axis_lock == AxisLock::Undecided {
                session.axis_lock = AxisLock::decide(touch_action, delta);
            }
            if session.axis_lock == AxisLock::Scrolling {
                trace!(?element, %touch_action, "Yielding move to native scrolling");
                disposition.stop_propagation = true;
                return disposition;
            }
            disposition.prevent_default = true;
        }

        if host.emit(element, &SwipeEvent::Move { delta }).suppressed {
            trace!(?element, "Swipe move suppressed by receiver");
            return disposition;
        }

        session.delta = delta;
        disposition
    }

    fn on_end<H: GestureHost>(
        &mut self,
        element: H::Element,
        event: &InputEvent,
        host: &mut H,
    ) -> InputDisposition {
        let Some(session) = self.session.take() else {
            return InputDisposition::default();
        };

        let duration_ms = event.timestamp_ms.saturating_sub(session.start.timestamp_ms);
        match SwipeDirection::from_delta(session.delta) {
            Some(direction) => {
                debug!(?element, ?direction, duration_ms, "Swipe recognized");
                host.emit(
                    element,
                    &SwipeEvent::End {
                        delta: session.delta,
                        direction,
                        duration_ms,
                    },
                );
            }
            None => trace!(?element, "Movement below swipe threshold"),
        }

        self.unsubscribe_tracking(element, host);
        InputDisposition::default()
    }
}

/// Swipe recognizer for every gesture-enabled element of one host
#[derive(Debug)]
pub struct SwipeRecognizer<E> {
    capabilities: Capabilities,
    bindings: HashMap<(E, Namespace), Binding>,
}

impl<E: Copy + Eq + Hash + Debug> SwipeRecognizer<E> {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            bindings: HashMap::new(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Input family every binding of this recognizer uses
    pub fn modality(&self) -> InputModality {
        InputModality::select(self.capabilities)
    }

    /// Begin gesture recognition on `element`, replacing any binding under
    /// the same namespace
    pub fn attach<H>(&mut self, element: E, config: SwipeConfig, host: &mut H)
    where
        H: GestureHost<Element = E>,
    {
        let namespace = Namespace::new(config.namespace.clone());
        if let Some(previous) = self.bindings.remove(&(element, namespace.clone())) {
            previous.release(element, host);
        }

        let triad = resolve(self.capabilities, &namespace);
        if triad.modality == InputModality::Pointer {
            host.set_touch_action(element, Some(config.touch_action));
        }
        for key in &triad.start {
            host.subscribe(element, key);
        }

        debug!(
            ?element,
            namespace = namespace.as_str(),
            modality = ?triad.modality,
            touch_action = %config.touch_action,
            "Swipe binding attached"
        );
        self.bindings.insert(
            (element, namespace),
            Binding {
                config,
                triad,
                session: None,
            },
        );
    }

    /// End gesture recognition for one namespace; unknown bindings are a no-op
    pub fn detach<H>(&mut self, element: E, namespace: &Namespace, host: &mut H)
    where
        H: GestureHost<Element = E>,
    {
        let Some(binding) = self.bindings.remove(&(element, namespace.clone())) else {
            return;
        };

        // The directive is per element; keep it while another binding uses it
        let shared = self.bindings.keys().any(|(other, _)| *other == element);
        if binding.triad.modality == InputModality::Pointer && !shared {
            host.set_touch_action(element, None);
        }
        binding.release(element, host);
        debug!(?element, namespace = namespace.as_str(), "Swipe binding detached");
    }

    /// Feed a raw event the host received on a subscribed key
    pub fn handle<H>(
        &mut self,
        element: E,
        key: &EventKey,
        event: &InputEvent,
        host: &mut H,
    ) -> InputDisposition
    where
        H: GestureHost<Element = E>,
    {
        let Some(binding) = self.bindings.get_mut(&(element, key.namespace.clone())) else {
            return InputDisposition::default();
        };

        let tracking = binding.session.is_some();
        match binding.triad.phase_of(key) {
            Some(Phase::Start) => binding.on_start(element, event, host),
            Some(Phase::Move) if tracking => binding.on_move(element, event, host),
            Some(Phase::End) if tracking => binding.on_end(element, event, host),
            _ => {
                trace!(?element, %key, "No active listener for event");
                InputDisposition::default()
            }
        }
    }

    pub fn is_attached(&self, element: E, namespace: &Namespace) -> bool {
        self.bindings.contains_key(&(element, namespace.clone()))
    }

    /// The live session of a binding, if a gesture is in flight
    pub fn session(&self, element: E, namespace: &Namespace) -> Option<&GestureSession> {
        self.bindings
            .get(&(element, namespace.clone()))
            .and_then(|binding| binding.session.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RecordingHost;

    const EL: u32 = 1;

    fn touch() -> Capabilities {
        Capabilities { touch_events: true, pointer_events: false }
    }

    fn pointer() -> Capabilities {
        Capabilities { touch_events: false, pointer_events: true }
    }

    fn mouse() -> Capabilities {
        Capabilities::default()
    }

    fn at(x: f64, y: f64, t: u64) -> InputEvent {
        InputEvent::touch(&[Point::new(x, y)], t)
    }

    fn setup(capabilities: Capabilities, config: SwipeConfig) -> (SwipeRecognizer<u32>, RecordingHost<u32>) {
        let mut recognizer = SwipeRecognizer::new(capabilities);
        let mut host = RecordingHost::new();
        recognizer.attach(EL, config, &mut host);
        (recognizer, host)
    }

    fn names(host: &RecordingHost<u32>) -> Vec<&'static str> {
        host.emitted.iter().map(|(_, event)| event.name()).collect()
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(SwipeDirection::from_delta(Point::new(50.0, 2.0)), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::from_delta(Point::new(-50.0, 2.0)), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::from_delta(Point::new(3.0, -40.0)), Some(SwipeDirection::Up));
        assert_eq!(SwipeDirection::from_delta(Point::new(5.0, 5.0)), Some(SwipeDirection::Down));
        assert_eq!(SwipeDirection::from_delta(Point::new(0.5, 0.3)), None);
        assert_eq!(SwipeDirection::from_delta(Point::new(1.0, -1.0)), None);
    }

    #[test]
    fn test_swipe_right() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 1000));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(120.0, 101.0, 1010));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(150.0, 102.0, 1020));
        host.dispatch(&mut recognizer, EL, "touchend", &at(150.0, 102.0, 1250));

        assert_eq!(names(&host), ["swipestart", "swipemove", "swipemove", "swipeend"]);
        assert_eq!(
            host.emitted.last().map(|(_, event)| event.clone()),
            Some(SwipeEvent::End {
                delta: Point::new(50.0, 2.0),
                direction: SwipeDirection::Right,
                duration_ms: 250,
            })
        );
        assert_eq!(host.listener_count(EL, "touchmove"), 0);
        assert_eq!(host.listener_count(EL, "touchend"), 0);
        assert!(recognizer.session(EL, &Namespace::default()).is_none());
    }

    #[test]
    fn test_sub_threshold_is_a_tap() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 0));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(100.5, 100.3, 5));
        host.dispatch(&mut recognizer, EL, "touchcancel", &at(100.5, 100.3, 10));

        assert_eq!(names(&host), ["swipestart", "swipemove"]);
        assert_eq!(host.listener_count(EL, "touchmove"), 0);
    }

    #[test]
    fn test_attach_twice_keeps_one_start_listener() {
        let config = SwipeConfig::new("carousel", TouchAction::None);
        let (mut recognizer, mut host) = setup(touch(), config.clone());
        recognizer.attach(EL, config, &mut host);

        assert_eq!(host.listener_count(EL, "touchstart"), 1);

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        assert_eq!(names(&host), ["swipestart"]);
    }

    #[test]
    fn test_reattach_mid_gesture_releases_tracking() {
        let config = SwipeConfig::new("carousel", TouchAction::None);
        let (mut recognizer, mut host) = setup(touch(), config.clone());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        assert_eq!(host.listener_count(EL, "touchmove"), 1);

        recognizer.attach(EL, config, &mut host);
        assert_eq!(host.listener_count(EL, "touchmove"), 0);
        assert_eq!(host.listener_count(EL, "touchstart"), 1);
    }

    #[test]
    fn test_detach_removes_everything() {
        let config = SwipeConfig::new("menu", TouchAction::PanY);
        let (mut recognizer, mut host) = setup(pointer(), config);
        assert_eq!(host.touch_action(EL), Some(TouchAction::PanY));

        let start = InputEvent::pointer(Point::new(10.0, 10.0), 0);
        host.dispatch(&mut recognizer, EL, "pointerdown", &start);
        assert!(host.listener_count(EL, "MSPointerLeave") > 0);

        recognizer.detach(EL, &Namespace::from("menu"), &mut host);
        assert_eq!(host.total_listeners(), 0);
        assert_eq!(host.touch_action(EL), None);

        host.emitted.clear();
        host.dispatch(&mut recognizer, EL, "pointerdown", &start);
        assert!(host.emitted.is_empty());

        // Second detach is a no-op
        recognizer.detach(EL, &Namespace::from("menu"), &mut host);
        assert!(!recognizer.is_attached(EL, &Namespace::from("menu")));
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut recognizer = SwipeRecognizer::new(touch());
        let mut host = RecordingHost::new();
        recognizer.attach(EL, SwipeConfig::new("a", TouchAction::None), &mut host);
        recognizer.attach(EL, SwipeConfig::new("b", TouchAction::None), &mut host);

        recognizer.detach(EL, &Namespace::from("a"), &mut host);
        assert_eq!(host.listener_count(EL, "touchstart"), 1);

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        assert_eq!(names(&host), ["swipestart"]);
        assert!(recognizer.session(EL, &Namespace::from("b")).is_some());
    }

    #[test]
    fn test_pan_y_yields_for_whole_session() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::new("", TouchAction::PanY));

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 0));
        let first = host.dispatch(&mut recognizer, EL, "touchmove", &at(110.0, 102.0, 10));
        assert!(first.stop_propagation);
        assert!(!first.prevent_default);

        // Vertical now dominates, but the decision is sticky
        let later = host.dispatch(&mut recognizer, EL, "touchmove", &at(111.0, 160.0, 20));
        assert!(later.stop_propagation);

        host.dispatch(&mut recognizer, EL, "touchend", &at(111.0, 160.0, 30));
        assert_eq!(names(&host), ["swipestart"]);
    }

    #[test]
    fn test_pan_x_claims_horizontal_dominance() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::new("", TouchAction::PanX));

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 0));
        let first = host.dispatch(&mut recognizer, EL, "touchmove", &at(60.0, 103.0, 10));
        assert!(first.prevent_default);
        assert!(!first.stop_propagation);

        // Later vertical dominance keeps the claimed gesture
        host.dispatch(&mut recognizer, EL, "touchmove", &at(61.0, 180.0, 20));
        host.dispatch(&mut recognizer, EL, "touchend", &at(61.0, 180.0, 30));
        assert_eq!(names(&host), ["swipestart", "swipemove", "swipemove", "swipeend"]);
    }

    #[test]
    fn test_still_first_move_decides_axis_lock() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::new("", TouchAction::PanY));

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 0));
        let first = host.dispatch(&mut recognizer, EL, "touchmove", &at(100.0, 100.0, 10));
        assert!(first.stop_propagation);
        assert!(!first.prevent_default);
        assert_eq!(
            recognizer.session(EL, &Namespace::default()).map(|s| s.axis_lock),
            Some(AxisLock::Scrolling)
        );

        // Vertical movement afterwards does not reopen the decision
        let later = host.dispatch(&mut recognizer, EL, "touchmove", &at(100.0, 160.0, 20));
        assert!(later.stop_propagation);
        host.dispatch(&mut recognizer, EL, "touchend", &at(100.0, 160.0, 30));
        assert_eq!(names(&host), ["swipestart"]);
    }

    #[test]
    fn test_none_claims_still_first_move() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        let first = host.dispatch(&mut recognizer, EL, "touchmove", &at(0.0, 0.0, 5));
        assert!(first.prevent_default);
        assert_eq!(
            recognizer.session(EL, &Namespace::default()).map(|s| s.axis_lock),
            Some(AxisLock::Swiping)
        );
    }

    #[test]
    fn test_detach_keeps_touch_action_of_remaining_binding() {
        let mut recognizer = SwipeRecognizer::new(pointer());
        let mut host = RecordingHost::new();
        recognizer.attach(EL, SwipeConfig::new("a", TouchAction::PanY), &mut host);
        recognizer.attach(EL, SwipeConfig::new("b", TouchAction::PanY), &mut host);

        recognizer.detach(EL, &Namespace::from("a"), &mut host);
        assert_eq!(host.touch_action(EL), Some(TouchAction::PanY));

        recognizer.detach(EL, &Namespace::from("b"), &mut host);
        assert_eq!(host.touch_action(EL), None);
    }

    #[test]
    fn test_pan_x_yields_vertical_dominance() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::new("", TouchAction::PanX));

        host.dispatch(&mut recognizer, EL, "touchstart", &at(100.0, 100.0, 0));
        let first = host.dispatch(&mut recognizer, EL, "touchmove", &at(102.0, 140.0, 10));
        assert!(first.stop_propagation);
        assert_eq!(names(&host), ["swipestart"]);
    }

    #[test]
    fn test_pointer_modality_skips_axis_lock() {
        let (mut recognizer, mut host) = setup(pointer(), SwipeConfig::new("", TouchAction::PanY));

        host.dispatch(&mut recognizer, EL, "pointerdown", &InputEvent::pointer(Point::new(0.0, 0.0), 0));
        let moved = host.dispatch(&mut recognizer, EL, "MSPointerMove", &InputEvent::pointer(Point::new(30.0, 1.0), 5));
        assert_eq!(moved, InputDisposition::default());

        host.dispatch(&mut recognizer, EL, "pointerup", &InputEvent::pointer(Point::new(30.0, 1.0), 9));
        assert_eq!(names(&host), ["swipestart", "swipemove", "swipeend"]);
    }

    #[test]
    fn test_multi_touch_start_is_rejected() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        let two = InputEvent::touch(&[Point::new(0.0, 0.0), Point::new(50.0, 50.0)], 0);
        host.dispatch(&mut recognizer, EL, "touchstart", &two);
        assert!(recognizer.session(EL, &Namespace::default()).is_none());

        // Nothing listens for moves without a qualifying start
        host.dispatch(&mut recognizer, EL, "touchmove", &at(80.0, 0.0, 10));
        // Even if a host delivers one anyway
        let key = EventKey::new("touchmove", Namespace::default());
        recognizer.handle(EL, &key, &at(80.0, 0.0, 10), &mut host);
        host.dispatch(&mut recognizer, EL, "touchend", &at(80.0, 0.0, 20));
        assert!(host.emitted.is_empty());
    }

    #[test]
    fn test_pinch_and_extra_contacts_mid_gesture_are_ignored() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(-40.0, 0.0, 10));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(-90.0, 0.0, 20).with_scale(1.2));
        let two = InputEvent::touch(&[Point::new(-95.0, 0.0), Point::new(10.0, 10.0)], 30);
        host.dispatch(&mut recognizer, EL, "touchmove", &two);
        assert!(recognizer.session(EL, &Namespace::default()).is_some());

        host.dispatch(&mut recognizer, EL, "touchend", &at(-40.0, 0.0, 40));
        match host.emitted.last() {
            Some((_, SwipeEvent::End { delta, direction, .. })) => {
                assert_eq!(*delta, Point::new(-40.0, 0.0));
                assert_eq!(*direction, SwipeDirection::Left);
            }
            other => panic!("expected swipe end, got {:?}", other),
        }
    }

    #[test]
    fn test_suppressed_start_never_tracks() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());
        host.suppress("swipestart");

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        assert_eq!(host.listener_count(EL, "touchmove"), 0);
        assert_eq!(host.listener_count(EL, "touchend"), 0);

        host.dispatch(&mut recognizer, EL, "touchmove", &at(60.0, 0.0, 5));
        host.dispatch(&mut recognizer, EL, "touchend", &at(60.0, 0.0, 9));
        assert_eq!(names(&host), ["swipestart"]);
    }

    #[test]
    fn test_suppressed_move_is_not_committed() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(0.0, 30.0, 5));
        host.suppress("swipemove");
        host.dispatch(&mut recognizer, EL, "touchmove", &at(0.0, 300.0, 10));

        let session = recognizer.session(EL, &Namespace::default()).unwrap();
        assert_eq!(session.delta, Point::new(0.0, 30.0));

        host.dispatch(&mut recognizer, EL, "touchend", &at(0.0, 300.0, 15));
        match host.emitted.last() {
            Some((_, SwipeEvent::End { delta, direction, .. })) => {
                assert_eq!(*delta, Point::new(0.0, 30.0));
                assert_eq!(*direction, SwipeDirection::Down);
            }
            other => panic!("expected swipe end, got {:?}", other),
        }
    }

    #[test]
    fn test_mouse_requires_primary_button() {
        let (mut recognizer, mut host) = setup(mouse(), SwipeConfig::default());

        let right = InputEvent::mouse(Point::new(0.0, 0.0), MouseButton::Secondary, 0);
        host.dispatch(&mut recognizer, EL, "mousedown", &right);
        assert!(host.emitted.is_empty());

        let left = InputEvent::mouse(Point::new(0.0, 0.0), MouseButton::Primary, 0);
        host.dispatch(&mut recognizer, EL, "mousedown", &left);
        let moved = InputEvent::mouse(Point::new(0.0, -25.0), MouseButton::Primary, 20);
        let disposition = host.dispatch(&mut recognizer, EL, "mousemove", &moved);
        assert!(disposition.prevent_default);
        host.dispatch(&mut recognizer, EL, "mouseleave", &moved);

        match host.emitted.last() {
            Some((_, SwipeEvent::End { direction, duration_ms, .. })) => {
                assert_eq!(*direction, SwipeDirection::Up);
                assert_eq!(*duration_ms, 20);
            }
            other => panic!("expected swipe end, got {:?}", other),
        }
    }

    #[test]
    fn test_image_drag_is_prevented_on_mouse_start() {
        let (mut recognizer, mut host) = setup(mouse(), SwipeConfig::default());

        let down = InputEvent::mouse(Point::new(5.0, 5.0), MouseButton::Primary, 0).on_image();
        let disposition = host.dispatch(&mut recognizer, EL, "mousedown", &down);
        assert!(disposition.prevent_default);
    }

    #[test]
    fn test_restart_while_tracking_keeps_single_listeners() {
        let (mut recognizer, mut host) = setup(touch(), SwipeConfig::default());

        host.dispatch(&mut recognizer, EL, "touchstart", &at(0.0, 0.0, 0));
        host.dispatch(&mut recognizer, EL, "touchmove", &at(30.0, 0.0, 5));
        host.dispatch(&mut recognizer, EL, "touchstart", &at(200.0, 0.0, 50));

        assert_eq!(host.listener_count(EL, "touchmove"), 1);
        let session = recognizer.session(EL, &Namespace::default()).unwrap();
        assert_eq!(session.start.x, 200.0);
        assert_eq!(session.delta, Point::ZERO);
    }

    #[test]
    fn test_elements_are_independent() {
        let mut recognizer = SwipeRecognizer::new(touch());
        let mut host = RecordingHost::new();
        recognizer.attach(1, SwipeConfig::default(), &mut host);
        recognizer.attach(2, SwipeConfig::default(), &mut host);

        host.dispatch(&mut recognizer, 1, "touchstart", &at(0.0, 0.0, 0));
        host.dispatch(&mut recognizer, 2, "touchstart", &at(0.0, 0.0, 0));
        host.dispatch(&mut recognizer, 1, "touchmove", &at(40.0, 0.0, 5));
        host.dispatch(&mut recognizer, 1, "touchend", &at(40.0, 0.0, 10));

        assert!(recognizer.session(1, &Namespace::default()).is_none());
        assert!(recognizer.session(2, &Namespace::default()).is_some());
        assert_eq!(host.listener_count(2, "touchmove"), 1);
    }
}
