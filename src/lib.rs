//! Responsive core - browser utility layer
//!
//! Features:
//! - Swipe gesture recognition over touch, pointer or mouse input
//! - Platform feature detection (text direction, transitions, touch/pointer)
//! - Transition-end normalization
//! - Data-attribute options and the attribute-prefix selector
//! - Pseudo-unique identifiers
//!
//! The crate never touches a real document. The embedding UI implements
//! `GestureHost` and `FeatureProbe` and feeds raw input back through
//! `SwipeRecognizer::handle`.

pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod selector;
pub mod support;
pub mod transition;
pub mod unique;

pub use config::{SwipeConfig, TouchAction};
pub use error::{Error, Result};
pub use input::{
    Capabilities, EventKey, GestureHost, InputDisposition, InputEvent, InputModality, Namespace,
    SwipeDirection, SwipeEvent, SwipeRecognizer,
};
pub use support::{FeatureProbe, Support};
