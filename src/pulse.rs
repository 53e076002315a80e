//! Audio server integration
//!
//! Talks to PulseAudio (or `pipewire-pulse`) through the `pactl` tool:
//! - `pactl --format=json info|list ...`: queries for defaults, devices, streams
//! - `pactl set-default-*`, `set-source-mute`, `move-sink-input`: mutations
//!
//! Every call is a blocking round trip. Failures are never retried.

use serde::Deserialize;
use std::collections::HashMap;
use std::process::Command;
use tracing::{debug, trace};

use crate::error::{DeviceKind, PapError, Result};
use crate::profile::{DeviceRef, ServerSnapshot};

// ============================================================================
// Live Device Types
// ============================================================================

/// A capture device currently known to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub description: String,
    /// Hardware card the device belongs to, if any
    pub card: Option<u32>,
    pub muted: bool,
}

/// A playback device currently known to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    pub index: u32,
    pub name: String,
    pub description: String,
    pub card: Option<u32>,
}

/// A playing stream and the sink it is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkInput {
    pub index: u32,
    pub sink: u32,
}

impl Source {
    #[must_use]
    pub fn to_ref(&self) -> DeviceRef {
        DeviceRef::new(&self.name, &self.description)
    }
}

impl Sink {
    #[must_use]
    pub fn to_ref(&self) -> DeviceRef {
        DeviceRef::new(&self.name, &self.description)
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Operations the profile logic needs from the audio server
pub trait AudioServer {
    /// Current default source and sink names
    ///
    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server cannot be queried.
    fn server_info(&self) -> Result<ServerSnapshot>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server cannot be queried.
    fn sources(&self) -> Result<Vec<Source>>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server cannot be queried.
    fn sinks(&self) -> Result<Vec<Sink>>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server rejects the change.
    fn set_default_source(&self, name: &str) -> Result<()>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server rejects the change.
    fn set_default_sink(&self, name: &str) -> Result<()>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server rejects the change.
    fn unmute_source(&self, name: &str) -> Result<()>;

    /// Streams currently playing
    ///
    /// # Errors
    /// Returns [`PapError::Connectivity`] if the server cannot be queried.
    fn sink_inputs(&self) -> Result<Vec<SinkInput>>;

    /// # Errors
    /// Returns [`PapError::Connectivity`] if the stream cannot be moved.
    fn move_sink_input(&self, input: u32, sink: u32) -> Result<()>;
}

/// Find a live source by name, `None` if the server no longer has it
#[must_use]
pub fn find_source<'a>(sources: &'a [Source], name: &str) -> Option<&'a Source> {
    let found = sources.iter().find(|s| s.name == name);
    log_missing(found.is_none(), DeviceKind::Source, name);
    found
}

/// Find a live sink by name, `None` if the server no longer has it
#[must_use]
pub fn find_sink<'a>(sinks: &'a [Sink], name: &str) -> Option<&'a Sink> {
    let found = sinks.iter().find(|s| s.name == name);
    log_missing(found.is_none(), DeviceKind::Sink, name);
    found
}

/// Find a live source that must exist
///
/// # Errors
/// Returns [`PapError::DeviceNotFound`] if no source has that name.
pub fn require_source<'a>(sources: &'a [Source], name: &str) -> Result<&'a Source> {
    find_source(sources, name).ok_or_else(|| not_found(DeviceKind::Source, name))
}

/// Find a live sink that must exist
///
/// # Errors
/// Returns [`PapError::DeviceNotFound`] if no sink has that name.
pub fn require_sink<'a>(sinks: &'a [Sink], name: &str) -> Result<&'a Sink> {
    find_sink(sinks, name).ok_or_else(|| not_found(DeviceKind::Sink, name))
}

fn log_missing(missing: bool, kind: DeviceKind, name: &str) {
    if missing {
        debug!("Failed to find {} named {}", kind, name);
    }
}

fn not_found(kind: DeviceKind, name: &str) -> PapError {
    PapError::DeviceNotFound {
        kind,
        name: name.to_string(),
    }
}

// ============================================================================
// pactl JSON Structures
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PactlInfo {
    default_sink_name: String,
    default_source_name: String,
}

/// Source or sink entry from `pactl --format=json list sources|sinks`
#[derive(Debug, Deserialize)]
struct PactlDevice {
    index: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    mute: bool,
    /// Numeric on PulseAudio, absent or a string on some `pipewire-pulse` versions
    #[serde(default)]
    card: Option<serde_json::Value>,
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

impl PactlDevice {
    fn card(&self) -> Option<u32> {
        if let Some(card) = self.card.as_ref().and_then(json_u32) {
            return Some(card);
        }
        ["alsa.card", "api.alsa.card"]
            .iter()
            .find_map(|key| self.properties.get(*key).and_then(json_u32))
    }

    fn description(&self) -> String {
        self.description.clone().unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Deserialize)]
struct PactlSinkInput {
    index: u32,
    sink: u32,
}

/// Accept both `3` and `"3"`; anything else (e.g. `"N/A"`) is no card
fn json_u32(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_info(json: &[u8]) -> serde_json::Result<ServerSnapshot> {
    let info: PactlInfo = serde_json::from_slice(json)?;
    Ok(ServerSnapshot {
        default_source_name: info.default_source_name,
        default_sink_name: info.default_sink_name,
    })
}

fn parse_sources(json: &[u8]) -> serde_json::Result<Vec<Source>> {
    let devices: Vec<PactlDevice> = serde_json::from_slice(json)?;
    Ok(devices
        .into_iter()
        .map(|d| Source {
            card: d.card(),
            description: d.description(),
            muted: d.mute,
            name: d.name,
        })
        .collect())
}

fn parse_sinks(json: &[u8]) -> serde_json::Result<Vec<Sink>> {
    let devices: Vec<PactlDevice> = serde_json::from_slice(json)?;
    Ok(devices
        .into_iter()
        .map(|d| Sink {
            index: d.index,
            card: d.card(),
            description: d.description(),
            name: d.name,
        })
        .collect())
}

fn parse_sink_inputs(json: &[u8]) -> serde_json::Result<Vec<SinkInput>> {
    let inputs: Vec<PactlSinkInput> = serde_json::from_slice(json)?;
    Ok(inputs
        .into_iter()
        .map(|i| SinkInput {
            index: i.index,
            sink: i.sink,
        })
        .collect())
}

// ============================================================================
// pactl Interface
// ============================================================================

/// Audio server reached through the `pactl` command-line tool
#[derive(Debug, Default, Clone, Copy)]
pub struct Pactl;

impl Pactl {
    /// Run `pactl` and return its stdout
    fn run(args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("pactl").args(args).output().map_err(|e| {
            PapError::Connectivity(format!(
                "Failed to get client: 'pactl' not found or failed ({e}). \
                 Is PulseAudio or pipewire-pulse installed?"
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PapError::Connectivity(format!(
                "pactl {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    fn query<T>(
        what: &str,
        args: &[&str],
        parse: impl FnOnce(&[u8]) -> serde_json::Result<T>,
    ) -> Result<T> {
        let mut full = vec!["--format=json"];
        full.extend_from_slice(args);
        let stdout = Self::run(&full)?;
        let parsed = parse(&stdout)
            .map_err(|e| PapError::Connectivity(format!("Failed to get {what}: {e}")))?;
        trace!("pactl {} returned {} bytes", args.join(" "), stdout.len());
        Ok(parsed)
    }
}

impl AudioServer for Pactl {
    fn server_info(&self) -> Result<ServerSnapshot> {
        Self::query("server info", &["info"], parse_info)
    }

    fn sources(&self) -> Result<Vec<Source>> {
        Self::query("sources", &["list", "sources"], parse_sources)
    }

    fn sinks(&self) -> Result<Vec<Sink>> {
        Self::query("sinks", &["list", "sinks"], parse_sinks)
    }

    fn set_default_source(&self, name: &str) -> Result<()> {
        Self::run(&["set-default-source", name])?;
        debug!("Set default source: {}", name);
        Ok(())
    }

    fn set_default_sink(&self, name: &str) -> Result<()> {
        Self::run(&["set-default-sink", name])?;
        debug!("Set default sink: {}", name);
        Ok(())
    }

    fn unmute_source(&self, name: &str) -> Result<()> {
        Self::run(&["set-source-mute", name, "0"])?;
        debug!("Unmuted source: {}", name);
        Ok(())
    }

    fn sink_inputs(&self) -> Result<Vec<SinkInput>> {
        Self::query("sink inputs", &["list", "sink-inputs"], parse_sink_inputs)
    }

    fn move_sink_input(&self, input: u32, sink: u32) -> Result<()> {
        Self::run(&["move-sink-input", &input.to_string(), &sink.to_string()])?;
        Ok(())
    }
}
