//! Swipe binding configuration
//!
//! A binding is configured by a namespace (so several bindings can share an
//! element) and a touch action that decides which axis is left to native
//! scrolling.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which axis, if any, the platform keeps for native panning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TouchAction {
    /// Claim every gesture (suppress native scroll/zoom)
    None,
    PanX,
    PanY,
}

impl Default for TouchAction {
    fn default() -> Self {
        TouchAction::None
    }
}

impl TouchAction {
    /// The value as written in a CSS `touch-action` declaration
    pub fn as_css(&self) -> &'static str {
        match self {
            TouchAction::None => "none",
            TouchAction::PanX => "pan-x",
            TouchAction::PanY => "pan-y",
        }
    }
}

impl fmt::Display for TouchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for TouchAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "none" | "" => Ok(TouchAction::None),
            "pan-x" => Ok(TouchAction::PanX),
            "pan-y" => Ok(TouchAction::PanY),
            other => Err(Error::InvalidTouchAction(other.to_string())),
        }
    }
}

/// Per-binding configuration passed to `SwipeRecognizer::attach`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Scopes the binding's listeners; empty means unscoped
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub touch_action: TouchAction,
}

impl SwipeConfig {
    pub fn new(namespace: impl Into<String>, touch_action: TouchAction) -> Self {
        Self {
            namespace: namespace.into(),
            touch_action,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded swipe config from {:?}", path);
        Ok(config)
    }
}
