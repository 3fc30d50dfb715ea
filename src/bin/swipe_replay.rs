//! Replay a scripted sequence of raw input events through the swipe
//! recognizer and print the recognized gesture events as JSON lines
//!
//! Scenario format (TOML):
//!
//! ```toml
//! suppress = ["swipemove"]
//!
//! [capabilities]
//! touch_events = true
//!
//! [binding]
//! namespace = "carousel"
//! touch_action = "pan-y"
//!
//! [[events]]
//! name = "touchstart"
//! at = 0
//! contacts = [{ x = 100.0, y = 100.0 }]
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use responsive_core::input::{event_name, InputEvent, MouseButton, Point, RecordingHost};
use responsive_core::{Capabilities, Namespace, SwipeConfig, SwipeRecognizer, TouchAction};

const ELEMENT: u32 = 0;

#[derive(Parser, Debug)]
#[command(name = "swipe-replay")]
#[command(about = "Replay raw input events through the swipe recognizer", long_about = None)]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Override the binding's touch action (none, pan-x or pan-y)
    #[arg(long)]
    touch_action: Option<TouchAction>,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    /// Swipe event names receivers veto
    #[serde(default)]
    suppress: Vec<String>,
    #[serde(default)]
    capabilities: Capabilities,
    #[serde(default)]
    binding: SwipeConfig,
    #[serde(default)]
    events: Vec<ScriptedEvent>,
}

#[derive(Debug, Deserialize)]
struct ScriptedEvent {
    /// Platform event name, e.g. `touchmove` or `MSPointerUp`
    name: String,
    /// Timestamp in milliseconds
    at: u64,
    #[serde(default)]
    contacts: Vec<Point>,
    #[serde(default)]
    button: Option<MouseButton>,
    #[serde(default)]
    scale: Option<f64>,
    #[serde(default)]
    on_image: bool,
}

impl ScriptedEvent {
    fn to_input(&self) -> InputEvent {
        InputEvent {
            contacts: self.contacts.clone(),
            button: self.button,
            scale: self.scale,
            timestamp_ms: self.at,
            on_image: self.on_image,
        }
    }
}

fn swipe_event_name(name: &str) -> Result<&'static str> {
    match name {
        "swipestart" => Ok("swipestart"),
        "swipemove" => Ok("swipemove"),
        "swipeend" => Ok("swipeend"),
        other => bail!("unknown swipe event {:?} in suppress list", other),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "debug,responsive_core=trace"
    } else {
        "warn,responsive_core=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let contents = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading scenario {}", args.scenario.display()))?;
    let mut scenario: Scenario = toml::from_str(&contents)
        .with_context(|| format!("parsing scenario {}", args.scenario.display()))?;
    if let Some(touch_action) = args.touch_action {
        scenario.binding.touch_action = touch_action;
    }

    let mut recognizer = SwipeRecognizer::new(scenario.capabilities);
    let mut host = RecordingHost::new();
    for name in &scenario.suppress {
        host.suppress(swipe_event_name(name)?);
    }

    let namespace = Namespace::new(scenario.binding.namespace.clone());
    recognizer.attach(ELEMENT, scenario.binding.clone(), &mut host);
    info!(
        modality = ?recognizer.modality(),
        events = scenario.events.len(),
        "Replaying scenario"
    );

    for scripted in &scenario.events {
        let Some(name) = event_name(&scripted.name) else {
            warn!(name = %scripted.name, "Skipping unknown platform event");
            continue;
        };

        let disposition = host.dispatch(&mut recognizer, ELEMENT, name, &scripted.to_input());
        debug!(name, at = scripted.at, ?disposition, "Dispatched");

        for (_, event) in host.take_events() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    recognizer.detach(ELEMENT, &namespace, &mut host);
    Ok(())
}
