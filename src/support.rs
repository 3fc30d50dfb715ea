//! Platform feature detection
//!
//! Probes are answered by the embedder through `FeatureProbe`, queried once
//! and cached in a `Support` value.

use serde::Serialize;
use tracing::debug;

use crate::input::Capabilities;

/// Read-only view of the platform used by the probes
pub trait FeatureProbe {
    /// A global (window) property or constructor exists, e.g. `PointerEvent`
    fn has_global(&self, name: &str) -> bool;

    /// An element style property exists, e.g. `WebkitTransition`
    fn has_style_property(&self, name: &str) -> bool;

    /// The `dir` attribute of the root element
    fn document_dir(&self) -> Option<String>;

    /// Width of the grid state indicator element
    fn grid_indicator_width(&self) -> f64;
}

/// Style properties checked in order, with the end events each one fires
const TRANSITION_END_EVENTS: &[(&str, &[&str])] = &[
    ("transition", &["transitionend"]),
    ("WebkitTransition", &["webkitTransitionEnd"]),
    ("MozTransition", &["transitionend"]),
    ("OTransition", &["oTransitionEnd", "otransitionend"]),
];

/// CSS transition support and the events that mark a transition end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionSupport {
    pub end: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support {
    /// Page is laid out right-to-left
    pub rtl: bool,
    pub transition: Option<TransitionSupport>,
    pub touch_events: bool,
    pub pointer_events: bool,
}

impl Support {
    pub fn detect(probe: &impl FeatureProbe) -> Self {
        let support = Self {
            rtl: detect_rtl(probe),
            transition: detect_transition(probe),
            touch_events: probe.has_global("ontouchstart") || probe.has_global("DocumentTouch"),
            pointer_events: probe.has_global("PointerEvent") || probe.has_global("MSPointerEvent"),
        };
        debug!(?support, "Detected platform support");
        support
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            touch_events: self.touch_events,
            pointer_events: self.pointer_events,
        }
    }
}

fn detect_rtl(probe: &impl FeatureProbe) -> bool {
    probe
        .document_dir()
        .is_some_and(|dir| dir.trim().eq_ignore_ascii_case("rtl"))
}

fn detect_transition(probe: &impl FeatureProbe) -> Option<TransitionSupport> {
    TRANSITION_END_EVENTS
        .iter()
        .find(|(property, _)| probe.has_style_property(property))
        .map(|(_, end)| TransitionSupport { end: *end })
}

/// Responsive grid breakpoints, narrowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grid {
    Xs,
    S,
    M,
    L,
}

impl Grid {
    pub const RANGE: [Grid; 4] = [Grid::Xs, Grid::S, Grid::M, Grid::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grid::Xs => "xs",
            Grid::S => "s",
            Grid::M => "m",
            Grid::L => "l",
        }
    }
}

/// Grid currently applied by the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentGrid {
    /// `None` when the indicator reports a width outside the range
    pub grid: Option<Grid>,
    pub index: i64,
    pub range: [Grid; 4],
}

/// The stylesheet sizes the indicator element to the index of the active grid
pub fn current_grid(probe: &impl FeatureProbe) -> CurrentGrid {
    let index = probe.grid_indicator_width().trunc() as i64;
    let grid = usize::try_from(index)
        .ok()
        .and_then(|i| Grid::RANGE.get(i).copied());

    CurrentGrid {
        grid,
        index,
        range: Grid::RANGE,
    }
}
