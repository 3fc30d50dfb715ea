//! Input handling - modality resolution and swipe gestures
//!
//! This module provides:
//! - Input modality resolution (touch, pointer or mouse event families)
//! - Swipe gesture recognition on top of the resolved modality
//! - An in-memory host for replaying and testing gestures

mod modality;
mod raw;
mod recording;
mod swipe;

pub use modality::*;
pub use raw::*;
pub use recording::*;
pub use swipe::*;
