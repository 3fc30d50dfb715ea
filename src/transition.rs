//! Transition-end normalization
//!
//! Platforms without CSS transitions never fire an end event, and platforms
//! with them sometimes skip it (element hidden, duration zero). A
//! `TransitionPlan` tells the caller whether to finish immediately or to wait
//! for the end events with a fallback timer; the `TransitionLatch` makes sure
//! the completion runs once whichever of the two arrives first.

use std::time::Duration;

use crate::support::TransitionSupport;

/// Parse the first entry of a CSS `transition-duration` value
///
/// Accepts seconds (`0.3s`) and milliseconds (`300ms`); anything else is
/// treated as no transition.
pub fn transition_duration(css: &str) -> Duration {
    let first = css.split(',').next().unwrap_or("").trim();

    let (number, scale_ms) = if let Some(ms) = first.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(s) = first.strip_suffix('s') {
        (s, 1000.0)
    } else {
        return Duration::ZERO;
    };

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            Duration::from_micros((value * scale_ms * 1000.0).round() as u64)
        }
        _ => Duration::ZERO,
    }
}

/// How to wait for the end of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionPlan {
    /// Transitions are unsupported; run the completion now
    Immediate,
    /// Listen for `events`, and force completion after `fallback`
    Await {
        events: &'static [&'static str],
        fallback: Duration,
    },
}

impl TransitionPlan {
    pub fn new(support: Option<&TransitionSupport>, transition_duration_css: &str) -> Self {
        match support {
            Some(support) => TransitionPlan::Await {
                events: support.end,
                fallback: transition_duration(transition_duration_css),
            },
            None => TransitionPlan::Immediate,
        }
    }
}

/// Fires a transition completion at most once
#[derive(Debug, Default)]
pub struct TransitionLatch {
    fired: bool,
}

impl TransitionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A real transition end event arrived; true if the completion should run
    pub fn on_transition_end(&mut self) -> bool {
        self.fire()
    }

    /// The fallback timer elapsed; true if the completion should run
    pub fn on_timeout(&mut self) -> bool {
        let fire = self.fire();
        if fire {
            tracing::debug!("Transition end not observed, forcing completion");
        }
        fire
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}
