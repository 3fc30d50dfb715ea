//! Raw input events as delivered by the host

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mouse button that triggered a mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// One platform input event, normalized across touch, pointer and mouse
///
/// `contacts` holds every active touch point for touch events (first one is
/// the tracked contact) and the single cursor position for pointer and mouse
/// events.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    pub contacts: Vec<Point>,
    /// Set on mouse events only
    pub button: Option<MouseButton>,
    /// Gesture scale reported by platforms that track pinches
    pub scale: Option<f64>,
    pub timestamp_ms: u64,
    /// The event target is an image (native image dragging applies)
    pub on_image: bool,
}

impl InputEvent {
    pub fn touch(contacts: &[Point], timestamp_ms: u64) -> Self {
        Self {
            contacts: contacts.to_vec(),
            button: None,
            scale: None,
            timestamp_ms,
            on_image: false,
        }
    }

    pub fn pointer(position: Point, timestamp_ms: u64) -> Self {
        Self {
            contacts: vec![position],
            button: None,
            scale: None,
            timestamp_ms,
            on_image: false,
        }
    }

    pub fn mouse(position: Point, button: MouseButton, timestamp_ms: u64) -> Self {
        Self {
            contacts: vec![position],
            button: Some(button),
            scale: None,
            timestamp_ms,
            on_image: false,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn on_image(mut self) -> Self {
        self.on_image = true;
        self
    }

    /// Position of the tracked contact
    pub fn position(&self) -> Option<Point> {
        self.contacts.first().copied()
    }

    pub fn is_pinch(&self) -> bool {
        // Zero means the platform did not report a scale
        matches!(self.scale, Some(scale) if scale != 0.0 && scale != 1.0)
    }
}
