//! Profile data model
//!
//! A profile pairs an optional capture device with a playback device under a
//! title. Devices are stored as name/description snapshots taken when the
//! profile was created, not as live handles.

use serde::{Deserialize, Serialize};

/// Snapshot of a device identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRef {
    /// Server-side device name (e.g., `"alsa_output.pci-0000_00_1f.3.analog-stereo"`)
    #[serde(alias = "Name")]
    pub name: String,
    /// Human-readable description
    #[serde(alias = "Description", default)]
    pub description: String,
}

impl DeviceRef {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named source/sink pairing
///
/// `source: None` means activating the profile leaves the capture device alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Source", default)]
    pub source: Option<DeviceRef>,
    #[serde(alias = "Sink")]
    pub sink: DeviceRef,
}

impl Profile {
    /// Whether this profile describes the server's current defaults
    #[must_use]
    pub fn matches(&self, snapshot: &ServerSnapshot) -> bool {
        self.source
            .as_ref()
            .is_none_or(|source| source.name == snapshot.default_source_name)
            && self.sink.name == snapshot.default_sink_name
    }

    /// Whether this profile references exactly the given source and sink names
    #[must_use]
    pub fn has_devices(&self, source_name: &str, sink_name: &str) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.name == source_name)
            && self.sink.name == sink_name
    }
}

/// Default device names reported by the audio server, queried per command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSnapshot {
    pub default_source_name: String,
    pub default_sink_name: String,
}

/// Canonical ordering: ascending by title, case-sensitive
pub fn sort_by_title(profiles: &mut [Profile]) {
    profiles.sort_by(|a, b| a.title.cmp(&b.title));
}
